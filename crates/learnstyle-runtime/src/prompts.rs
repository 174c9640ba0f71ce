//! Prompt assembly for the external classifier.
//!
//! The request carries four things: the respondent profile, the raw
//! per-axis counts as explicit numeric hints, a log of every choice made
//! (including the axis of the option passed over), and the fixed
//! classification rules. The rules are generated from the style table in
//! `learnstyle-core` — the pairings are never written out by hand here.

use learnstyle_core::{
    AnswerSet, EducationalContext, LearningStyle, QuestionBank, RawScores, RespondentProfile,
};

/// System-level persona instruction.
///
/// The analytical stance matters: the classifier should validate the
/// respondent's dominant style and then challenge it, rather than
/// reinforcing it exclusively. Reads as advice, not flattery.
pub const ANALYST_SYSTEM_PROMPT: &str = r#"
You are an educational psychology analyst specializing in David Kolb's
experiential learning theory.

Your role is to classify a respondent's learning style from their
questionnaire choices and produce practical, personalized guidance.

## Analytical Stance
1. Identify the dominant style from the evidence, then name one situation
   where leaning on it too hard would work against the respondent.
2. Ground every claim in the choices and scores you are given - do not
   invent preferences the answers do not show.
3. Recommendations must be concrete and actionable (books, formats,
   activities), tailored to the respondent's age and context.
4. Respond strictly as JSON conforming to the provided schema. No prose
   outside the JSON object.
"#;

/// The fixed classification rules, generated from the style table.
///
/// These pairings are a hard constraint the classifier must honor; they
/// are part of the contract, not a suggestion.
pub fn classification_rules() -> String {
    let mut rules = String::from(
        "Classify the respondent into exactly one of the four styles, defined as fixed \
         pairings of the two dominant axes:\n",
    );

    for style in LearningStyle::ALL {
        let (a, b) = style.dominant_axes();
        rules.push_str(&format!("- {} ({} + {})\n", style, a.code(), b.code()));
    }

    rules
}

/// Context-specific instruction fragment steering recommendation tone.
fn context_guidance(context: EducationalContext) -> &'static str {
    match context {
        EducationalContext::Professional => {
            "The respondent is a working professional: frame recommendations around career \
             growth, on-the-job learning, and workplace collaboration."
        }
        EducationalContext::University => {
            "The respondent is a university student: frame recommendations around coursework, \
             study technique, and academic projects."
        }
        EducationalContext::ContinuingEducation => {
            "The respondent is in continuing education: frame recommendations around self-paced \
             study, short courses, and sustaining motivation alongside other commitments."
        }
    }
}

/// One log line per answered question: the prompt, the chosen option
/// with its axis, and the axis of the option passed over.
///
/// The rejected axis is the asymmetry that lets the classifier reason
/// about trade-offs rather than isolated picks. Unknown question ids are
/// skipped, matching the aggregator.
pub fn choice_log(bank: &QuestionBank, answers: &AnswerSet) -> String {
    let mut log = String::new();

    for (id, choice) in answers.iter() {
        let Some(question) = bank.question(id) else {
            continue;
        };
        let chosen = question.chosen(choice);
        let rejected = question.rejected(choice);

        log.push_str(&format!(
            "Question: {} -> Chose \"{}\" (axis {}); passed over the {} option\n",
            question.prompt,
            chosen.text,
            chosen.axis.code(),
            rejected.axis.code(),
        ));
    }

    log
}

/// Assemble the full analysis request prompt.
pub fn build_analysis_prompt(
    profile: &RespondentProfile,
    bank: &QuestionBank,
    answers: &AnswerSet,
    raw: &RawScores,
) -> String {
    format!(
        r#"Analyze the following respondent's questionnaire to determine their Kolb learning style.

## Respondent
- Name: {name}
- Age: {age}
- Context: {context}

## Raw Axis Counts (local tally, use as numeric hints)
- CE (Concrete Experience): {ce}
- RO (Reflective Observation): {ro}
- AC (Abstract Conceptualization): {ac}
- AE (Active Experimentation): {ae}

## Inventory Choices
{log}
## Task
1. Estimate a 0-100 score for each of the four axes, consistent with the
   counts above and the pattern of choices.
2. {rules}
3. Provide 4-5 practical recommendations. {guidance}
4. Respond strictly in the provided JSON format.
"#,
        name = profile.name,
        age = profile.age,
        context = profile.context,
        ce = raw.ce,
        ro = raw.ro,
        ac = raw.ac,
        ae = raw.ae,
        log = choice_log(bank, answers),
        rules = classification_rules(),
        guidance = context_guidance(profile.context),
    )
}

/// The structured output schema submitted with the request, in the
/// service's schema dialect. The style enum comes from the style table,
/// so prompt, schema, and local validation cannot drift apart.
pub fn response_schema() -> serde_json::Value {
    let styles: Vec<String> = LearningStyle::ALL.iter().map(|s| s.to_string()).collect();

    let axis_score = |label: &str| {
        serde_json::json!({
            "type": "INTEGER",
            "description": format!("{} score (0-100)", label)
        })
    };

    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "style": {
                "type": "STRING",
                "enum": styles,
                "description": "The identified Kolb learning style."
            },
            "description": {
                "type": "STRING",
                "description": "A concise description of the respondent's learning personality."
            },
            "strengths": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-4 key strengths."
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "4-5 study or work strategies tailored to the respondent."
            },
            "axisData": {
                "type": "OBJECT",
                "properties": {
                    "ce": axis_score("Concrete Experience"),
                    "ro": axis_score("Reflective Observation"),
                    "ac": axis_score("Abstract Conceptualization"),
                    "ae": axis_score("Active Experimentation")
                },
                "required": ["ce", "ro", "ac", "ae"]
            }
        },
        "required": ["style", "description", "strengths", "recommendations", "axisData"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnstyle_core::{tally, Choice};

    fn sample_profile(context: EducationalContext) -> RespondentProfile {
        RespondentProfile::new("Dana Reyes", 31, context).unwrap()
    }

    fn sample_answers() -> AnswerSet {
        [(1, Choice::A), (2, Choice::B), (3, Choice::A), (4, Choice::B)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_system_prompt_sets_the_stance() {
        assert!(ANALYST_SYSTEM_PROMPT.contains("Kolb"));
        assert!(ANALYST_SYSTEM_PROMPT.contains("name one situation"));
        assert!(ANALYST_SYSTEM_PROMPT.contains("strictly as JSON"));
    }

    #[test]
    fn test_classification_rules_cover_all_styles() {
        let rules = classification_rules();
        assert!(rules.contains("Divergent (CE + RO)"));
        assert!(rules.contains("Assimilator (AC + RO)"));
        assert!(rules.contains("Convergent (AC + AE)"));
        assert!(rules.contains("Accommodator (CE + AE)"));
    }

    #[test]
    fn test_choice_log_names_chosen_and_rejected_axes() {
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = [(1, Choice::A)].into_iter().collect();

        let log = choice_log(&bank, &answers);
        assert!(log.contains("Trust my feelings and intuition."));
        assert!(log.contains("(axis CE)"));
        assert!(log.contains("passed over the AC option"));
    }

    #[test]
    fn test_choice_log_skips_unknown_ids() {
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = [(999, Choice::A)].into_iter().collect();
        assert!(choice_log(&bank, &answers).is_empty());
    }

    #[test]
    fn test_prompt_embeds_profile_hints_and_rules() {
        let bank = QuestionBank::builtin();
        let answers = sample_answers();
        let raw = tally(&bank, &answers);
        let profile = sample_profile(EducationalContext::Professional);

        let prompt = build_analysis_prompt(&profile, &bank, &answers, &raw);

        assert!(prompt.contains("Dana Reyes"));
        assert!(prompt.contains("Age: 31"));
        assert!(prompt.contains("CE (Concrete Experience): 1"));
        assert!(prompt.contains("AE (Active Experimentation): 2"));
        assert!(prompt.contains("Divergent (CE + RO)"));
        assert!(prompt.contains("career"));
    }

    #[test]
    fn test_context_steers_recommendation_tone() {
        let bank = QuestionBank::builtin();
        let answers = sample_answers();
        let raw = tally(&bank, &answers);

        let for_student = build_analysis_prompt(
            &sample_profile(EducationalContext::University),
            &bank,
            &answers,
            &raw,
        );
        assert!(for_student.contains("coursework"));

        let for_learner = build_analysis_prompt(
            &sample_profile(EducationalContext::ContinuingEducation),
            &bank,
            &answers,
            &raw,
        );
        assert!(for_learner.contains("self-paced"));
    }

    #[test]
    fn test_response_schema_styles_match_the_table() {
        let schema = response_schema();
        let schema_styles: Vec<String> = schema["properties"]["style"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();

        let table_styles: Vec<String> =
            LearningStyle::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(schema_styles, table_styles);
    }

    #[test]
    fn test_response_schema_requires_all_contract_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            vec!["style", "description", "strengths", "recommendations", "axisData"]
        );
    }
}
