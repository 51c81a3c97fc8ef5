use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use globetrotter_client::api::ApiClient;
use globetrotter_client::config::ClientConfig;
use globetrotter_client::session::GameSession;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "globetrotter_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting Globetrotter");

    let mut session = GameSession::new(ApiClient::new(config.api_url));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Globetrotter: guess the city from its clues.");
    if let Err(e) = session.start().await {
        println!("Failed to load a destination: {e}");
        return Ok(());
    }

    loop {
        if session.state().feedback().is_some() {
            let Some(line) =
                prompt(&mut input, "Enter for next, (c)hallenge a friend, (q)uit: ").await?
            else {
                break;
            };
            match line.as_str() {
                "q" => break,
                "c" => challenge(&mut session, &mut input).await?,
                _ => {
                    if let Err(e) = session.next_round().await {
                        println!("Failed to load a destination: {e}");
                    }
                }
            }
            continue;
        }

        show_round(&session);

        let Some(line) = prompt(&mut input, "Pick a number, (c)hallenge a friend, (q)uit: ").await?
        else {
            break;
        };
        match line.as_str() {
            "q" => break,
            "c" => challenge(&mut session, &mut input).await?,
            choice => {
                let picked = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| session.state().options().get(i).cloned());
                let Some(picked) = picked else {
                    println!("Not an option.");
                    continue;
                };

                session.answer(picked);
                show_feedback(&session);
            }
        }
    }

    println!("Final score: {}", session.state().score);
    Ok(())
}

fn show_round(session: &GameSession) {
    let state = session.state();
    let Some(destination) = state.destination() else {
        println!("Loading...");
        return;
    };

    println!();
    println!("Score: {}", state.score);
    println!("Clues:");
    for clue in &destination.clues {
        println!("  - {clue}");
    }
    for (i, option) in state.options().iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

fn show_feedback(session: &GameSession) {
    let Some(feedback) = session.state().feedback() else {
        return;
    };
    println!("{}", feedback.message());
    println!("Correct Answer: {}", feedback.correct_city);
    if let Some(fact) = feedback.fun_fact {
        println!("Fun Fact: {fact}");
    }
    if let Some(trivia) = feedback.trivia {
        println!("Trivia: {trivia}");
    }
}

async fn challenge(session: &mut GameSession, input: &mut Input) -> anyhow::Result<()> {
    if !session.state().can_challenge() {
        let Some(name) = prompt(input, "Enter your username: ").await? else {
            return Ok(());
        };
        session.set_username(name);
    }

    match session.challenge_friend().await {
        Ok(share) => println!("Invite link: {}", share.challenge.invite_link),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Print `label` and read one trimmed line. `None` on end of input.
async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}
