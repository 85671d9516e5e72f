//! Core logic: prompts, the model client, failure classification, sessions.

pub mod client;
pub mod diff;
pub mod errors;
pub mod prompts;
pub mod runner;
pub mod session;

pub use client::{ClientConfig, DEFAULT_BASE_URL, GeminiClient, TextGenerator};
pub use diff::{DiffKind, DiffSegment, diff_words};
pub use errors::{ErrorCategory, FailureKind, GenerateError, SessionError, classify};
pub use prompts::{
    DEFAULT_MODEL, Gender, ModelRequest, PoemLanguage, PoemRequest, PromptBuilder, SubmitInput,
};
pub use runner::{SessionEvent, process, spawn_request};
pub use session::{
    Lifecycle, PoemSession, RequestTicket, SessionPhase, SubmitRejected, TextSession,
};

/// Text operation selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Arabic spelling and grammar correction.
    #[default]
    Spellcheck,
    /// Conversion to the Roqaa calligraphic register.
    Roqaa,
    /// Emoji suggestions woven into the text.
    Emoji,
    /// Poem for a named person.
    Poem,
}

impl Mode {
    /// Returns all modes in tab order.
    #[must_use]
    pub const fn all() -> &'static [Mode] {
        &[Mode::Spellcheck, Mode::Roqaa, Mode::Emoji, Mode::Poem]
    }

    /// Returns the mode at a zero-based tab index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the zero-based tab index.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Spellcheck => 0,
            Self::Roqaa => 1,
            Self::Emoji => 2,
            Self::Poem => 3,
        }
    }

    /// Returns the next mode in the cycle.
    ///
    /// Cycles: Spellcheck -> Roqaa -> Emoji -> Poem -> Spellcheck
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Spellcheck => Self::Roqaa,
            Self::Roqaa => Self::Emoji,
            Self::Emoji => Self::Poem,
            Self::Poem => Self::Spellcheck,
        }
    }

    /// Returns the previous mode in the cycle.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Spellcheck => Self::Poem,
            Self::Roqaa => Self::Spellcheck,
            Self::Emoji => Self::Roqaa,
            Self::Poem => Self::Emoji,
        }
    }

    /// True for the three modes that take free text.
    #[must_use]
    pub const fn is_text_mode(&self) -> bool {
        !matches!(self, Self::Poem)
    }

    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Spellcheck => "تدقيق إملائي",
            Self::Roqaa => "تحويل إلى الرقعة",
            Self::Emoji => "اقتراح إيموجي",
            Self::Poem => "إنشاء قصيدة",
        }
    }

    /// Header title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Spellcheck => "مدقق إملائي عربي",
            Self::Roqaa => "تحويل إلى خط الرقعة",
            Self::Emoji => "اقتراح إيموجي للنص",
            Self::Poem => "إنشاء قصيدة بالذكاء الاصطناعي",
        }
    }

    /// Header description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Spellcheck => "استخدم قوة الذكاء الاصطناعي لتصحيح نصوصك العربية بدقة وسرعة.",
            Self::Roqaa => "حوّل نصوصك العربية إلى أسلوب خط الرقعة بسهولة.",
            Self::Emoji => "احصل على اقتراحات إيموجي مناسبة لإضافة لمسة تعبيرية لنصك العربي.",
            Self::Poem => {
                "أنشئ قصائد شعرية فريدة باللغة العربية (فصحى أو مصرية) بناءً على اسم الشخص وجنسه، مع خيار إضافة الإيموجي."
            }
        }
    }

    /// Placeholder for the input field.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Spellcheck => "اكتب أو الصق النص العربي هنا للتدقيق...",
            Self::Roqaa => "اكتب أو الصق النص العربي هنا لتحويله إلى الرقعة...",
            Self::Emoji => "اكتب أو الصق النص العربي هنا لاقتراح الإيموجي...",
            Self::Poem => "أدخل اسم الشخص هنا...",
        }
    }

    /// Label of the submit action.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Spellcheck => "دقق النص",
            Self::Roqaa => "حوّل إلى الرقعة",
            Self::Emoji => "اقترح إيموجي",
            Self::Poem => "أنشئ القصيدة",
        }
    }

    /// Message shown while a request is in flight.
    #[must_use]
    pub const fn loading_message(&self) -> &'static str {
        match self {
            Self::Spellcheck => "جاري البحث عن التصحيحات...",
            Self::Roqaa => "جاري تحويل النص إلى الرقعة...",
            Self::Emoji => "جاري اقتراح الإيموجي...",
            Self::Poem => "جاري كتابة القصيدة...",
        }
    }

    /// Title of the error panel.
    #[must_use]
    pub const fn error_title(&self) -> &'static str {
        match self {
            Self::Spellcheck => "خطأ في التدقيق",
            Self::Roqaa => "خطأ في التحويل إلى الرقعة",
            Self::Emoji => "خطأ في اقتراح الإيموجي",
            Self::Poem => "خطأ في إنشاء القصيدة",
        }
    }

    /// Hint shown before anything was submitted.
    #[must_use]
    pub const fn idle_hint(&self) -> &'static str {
        match self {
            Self::Spellcheck => "أدخل نصًا في الأعلى واضغط على زر التدقيق لعرض النتائج هنا.",
            Self::Roqaa => "أدخل نصًا في الأعلى واضغط على زر التحويل لعرض النص بخط الرقعة هنا.",
            Self::Emoji => "أدخل نصًا في الأعلى واضغط على زر اقتراح الإيموجي لعرض النتائج هنا.",
            Self::Poem => "أدخل اسم الشخص وجنسه في الأعلى واضغط على زر إنشاء القصيدة لعرضها هنا.",
        }
    }

    /// Title of the result panel on success.
    #[must_use]
    pub const fn success_title(&self) -> &'static str {
        match self {
            Self::Spellcheck => "النص المصحح",
            Self::Roqaa => "النص بخط الرقعة",
            Self::Emoji => "النص مع الإيموجي المقترحة",
            Self::Poem => "القصيدة الناتجة",
        }
    }

    /// Label of the copy action.
    #[must_use]
    pub const fn copy_label(&self) -> &'static str {
        match self {
            Self::Spellcheck => "نسخ النص المصحح",
            Self::Roqaa => "نسخ النص المحول",
            Self::Emoji => "نسخ النص مع الإيموجي",
            Self::Poem => "نسخ القصيدة",
        }
    }

    /// Validation message for a submit without the decisive field.
    #[must_use]
    pub const fn empty_input_message(&self) -> &'static str {
        match self {
            Self::Spellcheck => "الرجاء إدخال نص للتدقيق.",
            Self::Roqaa => "الرجاء إدخال نص للتحويل إلى الرقعة.",
            Self::Emoji => "الرجاء إدخال نص لاقتراح الإيموجي.",
            Self::Poem => errors::EMPTY_NAME_MESSAGE,
        }
    }
}
