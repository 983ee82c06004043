//! Update dispatch: command routing and reply rendering.
//!
//! Maps each incoming text message onto a game operation and renders the
//! structured reply into the Russian strings the bot speaks. Store failures
//! propagate as fatal; Telegram transport failures are logged and the poll
//! loop continues.

use std::time::Duration;

use tracing::{debug, warn};

use hangbot_core::game::gallery::stage_art;
use hangbot_core::game::{GuessOutcome, GuessReply, StartReply, StopReply};
use hangbot_types::chat::ChatId;
use hangbot_types::game::MAX_ATTEMPTS;

use crate::state::AppState;

/// Pause before re-polling after a transport error.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

const GREETING: &str = "Привет! Я бот для игры в виселицу. Используйте /startgame, чтобы начать игру, и /stopgame, чтобы закончить. Удачи!";
const UNKNOWN_COMMAND: &str = "Извините, я не знаю такой команды.";
const NO_ACTIVE_GAME: &str = "Вы не начали игру. Используйте /startgame, чтобы начать.";
const WORD_UNAVAILABLE: &str = "Не удалось получить слово для игры. Попробуйте еще раз позже.";
const GAME_ABANDONED: &str = "Игра окончена. Вы проиграли!";
const ONE_LETTER_PLEASE: &str = "Пожалуйста, введите одну букву.";
const ALREADY_GUESSED: &str = "Вы уже угадали эту букву.";

/// What an incoming text maps to.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Start,
    StartGame,
    StopGame,
    Unknown,
    Guess(&'a str),
}

/// Classify one incoming message text.
///
/// Commands may carry a `@botname` suffix in group chats; it is ignored.
fn classify(text: &str) -> Command<'_> {
    let text = text.trim();
    if !text.starts_with('/') {
        return Command::Guess(text);
    }

    let command = text
        .split_whitespace()
        .next()
        .unwrap_or(text)
        .split('@')
        .next()
        .unwrap_or(text);

    match command {
        "/start" => Command::Start,
        "/startgame" => Command::StartGame,
        "/stopgame" => Command::StopGame,
        _ => Command::Unknown,
    }
}

fn render_start(reply: StartReply) -> String {
    match reply {
        StartReply::Started { mask } => format!(
            "Игра началась! Вот ваше слово: {mask}\nУ вас {MAX_ATTEMPTS} попыток. Угадайте букву."
        ),
        StartReply::WordUnavailable => WORD_UNAVAILABLE.to_string(),
    }
}

fn render_stop(reply: StopReply) -> String {
    match reply {
        StopReply::Abandoned => GAME_ABANDONED.to_string(),
        StopReply::NoActiveGame => NO_ACTIVE_GAME.to_string(),
    }
}

fn render_guess(reply: GuessReply) -> String {
    let outcome = match reply {
        GuessReply::NoActiveGame => return NO_ACTIVE_GAME.to_string(),
        GuessReply::Game(outcome) => outcome,
    };

    match outcome {
        GuessOutcome::Invalid => ONE_LETTER_PLEASE.to_string(),
        GuessOutcome::AlreadyGuessed(_) => ALREADY_GUESSED.to_string(),
        GuessOutcome::Won { word } => format!("Поздравляем! Вы угадали слово: {word}"),
        GuessOutcome::Correct { mask, stage } => {
            format!("Верно! Слово: {mask}\n\n{}", stage_art(stage))
        }
        GuessOutcome::Lost { word, stage } => {
            format!("{}\nВы проиграли! Слово было: {word}", stage_art(stage))
        }
        GuessOutcome::Wrong {
            mask,
            attempts_remaining,
            stage,
        } => format!(
            "Неверно. У вас осталось {attempts_remaining} попыток.\n\n{}\n\nСлово: {mask}",
            stage_art(stage)
        ),
    }
}

/// Handle one message and produce the reply text.
///
/// Store errors bubble up: a dead database is not something the game loop
/// can recover from mid-reply.
async fn handle(state: &AppState, chat_id: ChatId, text: &str) -> anyhow::Result<String> {
    let reply = match classify(text) {
        Command::Start => GREETING.to_string(),
        Command::Unknown => UNKNOWN_COMMAND.to_string(),
        Command::StartGame => render_start(state.game_service.start_game(chat_id).await?),
        Command::StopGame => render_stop(state.game_service.stop_game(chat_id).await?),
        Command::Guess(guess) => render_guess(state.game_service.guess(chat_id, guess).await?),
    };
    Ok(reply)
}

/// Run the long-polling loop until the process is stopped.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let mut offset = 0i64;

    loop {
        let updates = match state
            .telegram
            .get_updates(offset, state.config.poll_timeout_secs)
            .await
        {
            Ok(updates) => updates,
            Err(err) => {
                warn!("polling failed: {err:#}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);

            let Some(message) = update.message else {
                continue;
            };
            let Some(text) = message.text else {
                continue;
            };
            let chat_id = ChatId(message.chat.id);
            debug!(%chat_id, "update received");

            let reply = handle(&state, chat_id, &text).await?;
            if let Err(err) = state.telegram.send_message(chat_id, &reply).await {
                warn!(%chat_id, "failed to send reply: {err:#}");
            }
        }
    }
}
