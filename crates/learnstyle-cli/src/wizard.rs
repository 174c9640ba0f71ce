//! The interactive session: intake, question steps, processing, result.
//!
//! Field-level gating lives here, at the presentation boundary. The core
//! is only ever invoked with a validated profile and a complete answer
//! set; invalid input re-prompts instead of propagating.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use learnstyle_core::{
    AnswerSet, Choice, EducationalContext, Question, QuestionBank, RespondentProfile, MIN_AGE,
};
use learnstyle_runtime::ClassifierGateway;

use crate::render;

/// Questions shown per wizard step.
pub const QUESTIONS_PER_STEP: usize = 4;

/// Run one full session: intake, answers, analysis, rendering.
///
/// All session state is local to this call and discarded on return.
pub async fn run(
    bank: &QuestionBank,
    gateway: &ClassifierGateway,
    as_json: bool,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Learning Style Inventory");
    println!("{} questions, about 3 minutes.\n", bank.len());

    let profile = intake_profile(&mut lines)?;
    let answers = collect_answers(bank, &mut lines)?;

    // The single suspension point of the session. No further input is
    // read until the gateway resolves.
    println!("\nAnalyzing your profile...");
    let outcome = gateway.analyze(&profile, bank, &answers).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    } else {
        render::render(&profile, &outcome);
    }

    Ok(())
}

/// Step 1: collect and validate the respondent profile.
fn intake_profile(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<RespondentProfile> {
    println!("-- Step 1: About you --");

    let name = loop {
        let input = ask("Your name: ", lines)?;
        if input.trim().is_empty() {
            println!("Please enter a non-empty name.");
            continue;
        }
        break input.trim().to_string();
    };

    let age = loop {
        let input = ask(&format!("Your age ({}+): ", MIN_AGE), lines)?;
        match parse_age(&input) {
            Some(age) => break age,
            None => println!("Please enter a whole number of at least {}.", MIN_AGE),
        }
    };

    let context = loop {
        println!("Your context:");
        println!("  1) University student");
        println!("  2) Working professional");
        println!("  3) Continuing education");
        let input = ask("Choose 1-3: ", lines)?;
        match parse_context(&input) {
            Some(context) => break context,
            None => println!("Please answer 1, 2, or 3."),
        }
    };

    RespondentProfile::new(name, age, context).context("Profile failed validation")
}

/// Steps 2..N: collect an answer for every question, a step at a time.
fn collect_answers(
    bank: &QuestionBank,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<AnswerSet> {
    let mut answers = AnswerSet::new();

    for (index, step) in bank.steps(QUESTIONS_PER_STEP).enumerate() {
        println!("\n-- Step {}: How do you prefer to learn? --", index + 2);

        for question in step {
            let choice = ask_question(question, lines)?;
            answers.record(question.id, choice);
        }
    }

    // Guaranteed by the loop above; a partial set must never reach the core.
    if !answers.is_complete(bank) {
        bail!("Session ended with unanswered questions");
    }

    Ok(answers)
}

fn ask_question(
    question: &Question,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Choice> {
    println!("\n{}", question.prompt);
    println!("  A) {}", question.option_a.text);
    println!("  B) {}", question.option_b.text);

    loop {
        let input = ask("Your answer (A/B): ", lines)?;
        match parse_choice(&input) {
            Some(choice) => return Ok(choice),
            None => println!("Please answer A or B."),
        }
    }
}

fn ask(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    match lines.next() {
        Some(line) => line.context("Failed to read input"),
        None => bail!("Input ended before the session was complete"),
    }
}

fn parse_age(input: &str) -> Option<u8> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|age| *age >= MIN_AGE)
}

fn parse_context(input: &str) -> Option<EducationalContext> {
    match input.trim() {
        "1" => Some(EducationalContext::University),
        "2" => Some(EducationalContext::Professional),
        "3" => Some(EducationalContext::ContinuingEducation),
        _ => None,
    }
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_ascii_uppercase().as_str() {
        "A" => Some(Choice::A),
        "B" => Some(Choice::B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_accepts_both_cases() {
        assert_eq!(parse_choice("a"), Some(Choice::A));
        assert_eq!(parse_choice(" B "), Some(Choice::B));
        assert_eq!(parse_choice("c"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_parse_age_enforces_minimum() {
        assert_eq!(parse_age("17"), None);
        assert_eq!(parse_age("18"), Some(18));
        assert_eq!(parse_age(" 42 "), Some(42));
        assert_eq!(parse_age("forty"), None);
    }

    #[test]
    fn test_parse_context_options() {
        assert_eq!(parse_context("1"), Some(EducationalContext::University));
        assert_eq!(parse_context("2"), Some(EducationalContext::Professional));
        assert_eq!(parse_context("3"), Some(EducationalContext::ContinuingEducation));
        assert_eq!(parse_context("4"), None);
    }

    #[test]
    fn test_intake_profile_reprompts_until_valid() {
        let mut lines = [
            "",          // empty name, re-prompted
            "Iris Chen", // accepted
            "16",        // under age, re-prompted
            "abc",       // not a number, re-prompted
            "34",        // accepted
            "9",         // invalid context, re-prompted
            "2",         // accepted
        ]
        .into_iter()
        .map(|s| Ok(s.to_string()));

        let profile = intake_profile(&mut lines).unwrap();
        assert_eq!(profile.name, "Iris Chen");
        assert_eq!(profile.age, 34);
        assert_eq!(profile.context, EducationalContext::Professional);
    }

    #[test]
    fn test_collect_answers_covers_the_whole_bank() {
        let bank = QuestionBank::builtin();
        let mut lines = ["a", "b", "a", "b", "x", "a", "b", "a", "b"]
            .into_iter()
            .map(|s| Ok(s.to_string()));

        let answers = collect_answers(&bank, &mut lines).unwrap();
        assert!(answers.is_complete(&bank));
        assert_eq!(answers.choice(1), Some(Choice::A));
        // The invalid "x" was re-prompted, so question 5 got the next "a".
        assert_eq!(answers.choice(5), Some(Choice::A));
    }

    #[test]
    fn test_exhausted_input_is_an_error_not_a_partial_set() {
        let bank = QuestionBank::builtin();
        let mut lines = ["a", "b"].into_iter().map(|s| Ok(s.to_string()));

        assert!(collect_answers(&bank, &mut lines).is_err());
    }
}
