//! Outbound reply construction and sending.
//!
//! Reply building is a pure function over the parsed items so the mapping
//! from search results to chat messages can be tested without a live bot.

use crate::search::Infographic;
use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode};
use tracing::warn;

/// Sent when the catalogue had nothing for the query
pub const NOT_FOUND_MESSAGE: &str = "Tidak ada infografis yang ditemukan.";

/// Label of the download button under each infographic
const DOWNLOAD_BUTTON_LABEL: &str = "⬇️ Unduh";

/// One outbound chat action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message
    Text(String),
    /// Photo with an HTML caption and an optional download link button
    Photo {
        /// Source URL of the image
        url: String,
        /// HTML caption, already escaped
        caption: String,
        /// Link for the download button, when the item carries one
        download_url: Option<String>,
    },
}

/// Map search results to the ordered sequence of outbound replies.
///
/// An empty result list becomes a single [`NOT_FOUND_MESSAGE`] text; anything
/// else becomes one photo per item, in upstream order, captioned with the
/// bold title.
#[must_use]
pub fn build_replies(items: &[Infographic]) -> Vec<Reply> {
    if items.is_empty() {
        return vec![Reply::Text(NOT_FOUND_MESSAGE.to_string())];
    }

    items
        .iter()
        .map(|item| Reply::Photo {
            url: item.image_url.clone(),
            caption: format!("<b>{}</b>", html_escape::encode_text(&item.title)),
            download_url: if item.download_url.is_empty() {
                None
            } else {
                Some(item.download_url.clone())
            },
        })
        .collect()
}

/// Send the replies to the chat, in order.
///
/// Items whose URLs do not parse are skipped with a warning instead of
/// cutting the sequence short.
///
/// # Errors
///
/// Returns an error if Telegram rejects one of the messages.
pub async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>) -> Result<()> {
    for reply in replies {
        match reply {
            Reply::Text(text) => {
                bot.send_message(chat_id, text).await?;
            }
            Reply::Photo {
                url,
                caption,
                download_url,
            } => {
                let Ok(image_url) = url.parse() else {
                    warn!(url = %url, "skipping infographic with unparseable image URL");
                    continue;
                };

                let mut request = bot
                    .send_photo(chat_id, InputFile::url(image_url))
                    .caption(caption)
                    .parse_mode(ParseMode::Html);

                if let Some(markup) = download_url.as_deref().and_then(download_keyboard) {
                    request = request.reply_markup(markup);
                }

                request.await?;
            }
        }
    }

    Ok(())
}

fn download_keyboard(download_url: &str) -> Option<InlineKeyboardMarkup> {
    let url = download_url.parse().ok()?;
    Some(InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
        DOWNLOAD_BUTTON_LABEL,
        url,
    )]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, img: &str, dl: &str) -> Infographic {
        Infographic {
            title: title.to_string(),
            image_url: img.to_string(),
            download_url: dl.to_string(),
        }
    }

    #[test]
    fn test_no_items_yields_not_found_text() {
        let replies = build_replies(&[]);
        assert_eq!(replies, vec![Reply::Text(NOT_FOUND_MESSAGE.to_string())]);
    }

    #[test]
    fn test_one_photo_per_item_in_order() {
        let items = [item("A", "u1", "d1"), item("B", "u2", "")];
        let replies = build_replies(&items);

        assert_eq!(
            replies,
            vec![
                Reply::Photo {
                    url: "u1".to_string(),
                    caption: "<b>A</b>".to_string(),
                    download_url: Some("d1".to_string()),
                },
                Reply::Photo {
                    url: "u2".to_string(),
                    caption: "<b>B</b>".to_string(),
                    download_url: None,
                },
            ]
        );
    }

    #[test]
    fn test_title_is_html_escaped() {
        let replies = build_replies(&[item("PDRB <2024> & lainnya", "u1", "")]);
        match &replies[0] {
            Reply::Photo { caption, .. } => {
                assert_eq!(caption, "<b>PDRB &lt;2024&gt; &amp; lainnya</b>");
            }
            Reply::Text(_) => panic!("expected a photo reply"),
        }
    }

    #[test]
    fn test_building_is_deterministic() {
        let items = [item("A", "u1", "d1")];
        assert_eq!(build_replies(&items), build_replies(&items));
    }
}
