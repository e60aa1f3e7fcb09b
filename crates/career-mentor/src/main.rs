//! An interactive career mentor in the terminal.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::pin::pin;
use std::time::Duration;

use career_mentor::command::Command;
use career_mentor::config::{self, API_KEY_VAR};
use career_mentor::core::MentorBuilder;
use career_mentor::render::{
    render_banner, render_quick_questions, render_transcript, render_turn,
};
use career_mentor_hf_model::HuggingFaceProvider;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::select;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(config) = config::config_from_env() else {
        eprintln!("{API_KEY_VAR} environment variable is not set");
        return;
    };
    debug!("using config: {config:?}");

    let mut mentor =
        MentorBuilder::with_model_provider(HuggingFaceProvider::new(config))
            .build();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .expect("spinner template is valid")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!("{}", render_banner());
    println!("{}", render_quick_questions(mentor.quick_questions()));

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut lines).await else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Ask(text) => {
                let progress_bar = ProgressBar::new_spinner();
                progress_bar.set_style(progress_style.clone());
                progress_bar.set_message("🧑‍💼 Mentor is thinking...");

                // Input is not read again until the answer settles.
                let mut answer = pin!(mentor.ask(text));
                let turn = loop {
                    progress_bar.inc(1);
                    select! {
                        turn = &mut answer => break turn,
                        _ = sleep(Duration::from_millis(100)) => {}
                    }
                };

                // Finish the progress bar before printing anything else.
                progress_bar.finish_and_clear();
                println!("{}\n", render_turn(turn));
            }
            Command::QuickQuestion(index) => {
                match mentor.ask_quick_question(index) {
                    Some(turns) => println!("{}\n", render_transcript(turns)),
                    None => println!(
                        "There is no quick question /{}, type /help to list \
                         them.\n",
                        index + 1
                    ),
                }
            }
            Command::Reset => {
                mentor.reset();
                println!("Chat reset.\n");
            }
            Command::Help => {
                let quick_questions = mentor.quick_questions();
                println!("{}", render_quick_questions(quick_questions));
            }
            Command::History => {
                let transcript = mentor.transcript();
                if transcript.is_empty() {
                    println!("The chat is empty.\n");
                } else {
                    println!("{}\n", render_transcript(transcript.all()));
                }
            }
            Command::Quit => break,
            Command::Unknown(name) => {
                println!("Unknown command {name}, type /help for help.\n");
            }
        }
    }
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    match lines.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
