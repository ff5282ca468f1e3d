//! Closed registry of message kinds.
//!
//! Each kind is identified by its `(namespace, name)` header pair. The table
//! is fixed at build time; there is no runtime registration.

use std::fmt;

/// Every message kind with a typed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ClearQueue,
    Exception,
    ExpectSpeech,
    ExpectSpeechTimedOut,
    Play,
    PlaybackState,
    Recognize,
    Speak,
    Stop,
    SynchronizeState,
}

impl MessageKind {
    /// All known kinds, in discriminator order.
    pub const ALL: [MessageKind; 10] = [
        MessageKind::ClearQueue,
        MessageKind::Play,
        MessageKind::PlaybackState,
        MessageKind::Stop,
        MessageKind::ExpectSpeech,
        MessageKind::ExpectSpeechTimedOut,
        MessageKind::Recognize,
        MessageKind::Speak,
        MessageKind::Exception,
        MessageKind::SynchronizeState,
    ];

    /// Interface namespace the kind belongs to.
    pub fn namespace(self) -> &'static str {
        match self {
            MessageKind::ClearQueue
            | MessageKind::Play
            | MessageKind::PlaybackState
            | MessageKind::Stop => "AudioPlayer",
            MessageKind::ExpectSpeech
            | MessageKind::ExpectSpeechTimedOut
            | MessageKind::Recognize => "SpeechRecognizer",
            MessageKind::Speak => "SpeechSynthesizer",
            MessageKind::Exception | MessageKind::SynchronizeState => "System",
        }
    }

    /// Header `name` of the kind.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::ClearQueue => "ClearQueue",
            MessageKind::Exception => "Exception",
            MessageKind::ExpectSpeech => "ExpectSpeech",
            MessageKind::ExpectSpeechTimedOut => "ExpectSpeechTimedOut",
            MessageKind::Play => "Play",
            MessageKind::PlaybackState => "PlaybackState",
            MessageKind::Recognize => "Recognize",
            MessageKind::Speak => "Speak",
            MessageKind::Stop => "Stop",
            MessageKind::SynchronizeState => "SynchronizeState",
        }
    }

    /// Look up a kind by its header pair. Matching is exact and case-sensitive.
    pub fn lookup(namespace: &str, name: &str) -> Option<Self> {
        let kind = match (namespace, name) {
            ("AudioPlayer", "ClearQueue") => MessageKind::ClearQueue,
            ("AudioPlayer", "Play") => MessageKind::Play,
            ("AudioPlayer", "PlaybackState") => MessageKind::PlaybackState,
            ("AudioPlayer", "Stop") => MessageKind::Stop,
            ("SpeechRecognizer", "ExpectSpeech") => MessageKind::ExpectSpeech,
            ("SpeechRecognizer", "ExpectSpeechTimedOut") => MessageKind::ExpectSpeechTimedOut,
            ("SpeechRecognizer", "Recognize") => MessageKind::Recognize,
            ("SpeechSynthesizer", "Speak") => MessageKind::Speak,
            ("System", "Exception") => MessageKind::Exception,
            ("System", "SynchronizeState") => MessageKind::SynchronizeState,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace(), self.name())
    }
}
