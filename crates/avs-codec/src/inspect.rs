//! Line-oriented inspector behind the `avs-codec` binary.
//!
//! Each non-empty input line is one wire message. Every line produces one
//! output line: a typed summary, or the error code when decoding failed.

use std::io::{self, BufRead, Write};

use avs_core::protocol::typed::TypedMessage;

use crate::codec::Codec;

/// Counters for one inspection run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectStats {
    pub typed: usize,
    pub generic: usize,
    pub rejected: usize,
}

/// One-line description of a message and its derived fields.
pub fn summarize(msg: &TypedMessage) -> String {
    let head = match msg.kind() {
        Some(kind) => format!("{kind} typed"),
        None => format!("{} generic", msg.message()),
    };

    let detail = match msg {
        TypedMessage::ClearQueue(v) => format!("clear_behavior={:?}", v.payload.clear_behavior),
        TypedMessage::Exception(v) => {
            format!("code={:?} description={:?}", v.payload.code, v.payload.description)
        }
        TypedMessage::ExpectSpeech(v) => format!("timeout={:?}", v.timeout()),
        TypedMessage::Play(v) => {
            let stream = &v.payload.audio_item.stream;
            format!(
                "message_id={:?} dialog_request_id={:?} play_behavior={:?} content_id={:?} \
                 offset={:?}",
                v.message_id(),
                v.dialog_request_id(),
                v.payload.play_behavior,
                stream.content_id(),
                stream.offset()
            )
        }
        TypedMessage::PlaybackState(v) => format!(
            "token={:?} offset={:?} player_activity={:?}",
            v.payload.token,
            v.offset(),
            v.payload.player_activity
        ),
        TypedMessage::Recognize(v) => {
            format!("profile={:?} format={:?}", v.payload.profile, v.payload.format)
        }
        TypedMessage::Speak(v) => {
            format!("format={:?} content_id={:?}", v.payload.format, v.content_id())
        }
        TypedMessage::ExpectSpeechTimedOut(_)
        | TypedMessage::Stop(_)
        | TypedMessage::SynchronizeState(_)
        | TypedMessage::Message(_) => String::new(),
    };

    if detail.is_empty() {
        head
    } else {
        format!("{head} {detail}")
    }
}

/// Decode every line of `input` and write one summary line per message.
pub fn inspect_lines<R: BufRead, W: Write>(
    codec: &Codec,
    input: R,
    out: &mut W,
) -> io::Result<InspectStats> {
    let mut stats = InspectStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match codec.decode_typed(line.as_bytes()) {
            Ok(msg) => {
                if msg.is_typed() {
                    stats.typed += 1;
                } else {
                    stats.generic += 1;
                }
                writeln!(out, "{}", summarize(&msg))?;
            }
            Err(e) => {
                stats.rejected += 1;
                tracing::warn!(
                    line = idx + 1,
                    code = e.code().as_str(),
                    error = %e,
                    "rejected message"
                );
                writeln!(out, "line {}: {} {e}", idx + 1, e.code().as_str())?;
            }
        }
    }

    Ok(stats)
}
