//! Command handlers for /start, /help and /infografis.

use crate::bot::args::parse_search_args;
use crate::bot::replies::{build_replies, send_replies};
use crate::search::{SearchClient, SearchError};
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

/// Commands understood by the bot
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Perintah yang didukung:")]
pub enum Command {
    #[command(description = "Menampilkan pesan sambutan.")]
    Start,
    #[command(description = "Menampilkan bantuan penggunaan bot.")]
    Help,
    #[command(description = "Mencari infografis: /infografis <keyword> <halaman> <jumlah>.")]
    Infografis(String),
}

const WELCOME_TEXT: &str = "Selamat datang di Bot Infografis!\n\
    Bot ini menyediakan akses cepat untuk mendapatkan infografis dari berbagai topik.\n\
    Anda dapat menggunakan perintah berikut:\n\
    - /infografis <keyword> <halaman> <jumlah>: Mencari infografis berdasarkan keyword.\n\
    \x20 Jumlah default infografis yang ditampilkan adalah 5, maksimal 10 per permintaan.\n\
    Untuk bantuan lebih lanjut, Anda bisa menggunakan perintah /help.";

const HELP_TEXT: &str = "Bantuan Bot Infografis:\n\
    Bot ini dirancang untuk membantu Anda mencari dan mengakses infografis dengan mudah.\n\n\
    Cara menggunakan:\n\
    /infografis <keyword> <halaman> <jumlah>\n\
    Contoh: /infografis transportasi 1 3\n\
    Ini akan menampilkan 3 infografis tentang 'transportasi' dari halaman 1.\n\n\
    Perintah lainnya:\n\
    /start - Menampilkan pesan sambutan dan informasi dasar tentang bot.\n\
    /help - Menampilkan informasi bantuan tentang cara menggunakan bot.\n\n\
    Jika Anda memiliki pertanyaan lebih lanjut, jangan ragu untuk bertanya!";

/// Handle /start
///
/// # Errors
///
/// Returns an error if the welcome message cannot be sent.
pub async fn start(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    Ok(())
}

/// Handle /help
///
/// # Errors
///
/// Returns an error if the help message cannot be sent.
pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}

/// Handle /infografis: parse the arguments, query the catalogue and send the
/// results back as photos.
///
/// Every failure path sends exactly one message to the chat. Parse and
/// transport failures abort before any photo goes out.
///
/// # Errors
///
/// Returns an error if a message cannot be sent to the chat.
pub async fn infografis(
    bot: Bot,
    msg: Message,
    client: Arc<SearchClient>,
    args: String,
) -> Result<()> {
    let query = match parse_search_args(&args) {
        Ok(query) => query,
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
            return Ok(());
        }
    };

    info!(
        keyword = %query.keyword,
        page = query.page,
        count = query.count,
        "infographic search"
    );

    let items = match client.search(&query).await {
        Ok(items) => items,
        Err(e) => {
            warn!("search request failed: {e}");
            bot.send_message(msg.chat.id, transport_error_message(&e))
                .await?;
            return Ok(());
        }
    };

    send_replies(&bot, msg.chat.id, build_replies(&items)).await
}

/// Sent when the user writes something that is not a command
pub const UNKNOWN_INPUT_TEXT: &str =
    "Perintah tidak dikenali. Gunakan /help untuk melihat cara menggunakan bot.";

/// Handle plain text that is not a command
///
/// # Errors
///
/// Returns an error if the hint message cannot be sent.
pub async fn unknown_input(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, UNKNOWN_INPUT_TEXT).await?;
    Ok(())
}

/// User-facing wording for transport-level search failures. Wrong or empty
/// upstream data never reaches this; it is reported as "nothing found".
pub(crate) fn transport_error_message(err: &SearchError) -> String {
    match err {
        SearchError::Status(code) => {
            format!("Error: Received status code {code}. Please try again later.")
        }
        SearchError::Network(_) | SearchError::MalformedResponse(_) => {
            "Error: Unable to process the response. Please try again later.".to_string()
        }
    }
}
