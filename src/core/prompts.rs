//! Prompt construction for the remote model.
//!
//! Every mode maps its inputs to a single self-contained [`ModelRequest`]:
//! - **Spellcheck**: proof-read and return the corrected text only
//! - **Roqaa**: restyle the text in the Roqaa calligraphic register
//! - **Emoji**: weave fitting emoji into the text
//! - **Poem**: write a poem for a named person
//!
//! Builders return `None` when the decisive field is blank. That sentinel is
//! resolved locally and never reaches the model.

use std::fmt::Write;

use super::Mode;

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// A request for the remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Model identifier (e.g. `gemini-2.5-flash-preview-04-17`).
    pub model: String,
    /// Full natural-language instruction including the user's data.
    pub prompt: String,
}

/// Gender of the person a poem is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the other gender.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "ذكر",
            Self::Female => "أنثى",
        }
    }

    /// Descriptor embedded in the poem prompt.
    #[must_use]
    pub const fn descriptor(self) -> &'static str {
        match self {
            Self::Male => "رجل",
            Self::Female => "امرأة",
        }
    }
}

/// Language register of a generated poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoemLanguage {
    /// Modern Standard Arabic (Fusha).
    #[default]
    Standard,
    /// Egyptian colloquial Arabic.
    Vernacular,
}

impl PoemLanguage {
    /// Returns the other register.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Standard => Self::Vernacular,
            Self::Vernacular => Self::Standard,
        }
    }

    /// Short label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "الفصحى",
            Self::Vernacular => "المصرية",
        }
    }

    /// Full register name repeated at the end of the poem prompt.
    #[must_use]
    pub const fn register_name(self) -> &'static str {
        match self {
            Self::Standard => "العربية الفصحى",
            Self::Vernacular => "العامية المصرية",
        }
    }

    /// Register instruction embedded in the poem prompt.
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Standard => STANDARD_REGISTER_INSTRUCTION,
            Self::Vernacular => VERNACULAR_REGISTER_INSTRUCTION,
        }
    }
}

/// Instruction for poems in Modern Standard Arabic.
pub const STANDARD_REGISTER_INSTRUCTION: &str =
    "القصيدة يجب أن تكون باللغة العربية الفصحى، بأسلوب راقٍ وجميل.";

/// Instruction for poems in Egyptian colloquial Arabic.
pub const VERNACULAR_REGISTER_INSTRUCTION: &str =
    "القصيدة يجب أن تكون باللهجة المصرية العامية، بأسلوب حديث وواضح وسلس.";

/// Instruction added to poem prompts when emoji are requested.
pub const POEM_EMOJI_INSTRUCTION: &str = "قم بدمج إيموجي (رموز تعبيرية) مناسبة بشكل طبيعي وجميل داخل أبيات القصيدة أو في نهاياتها لتعزيز المعنى أو الشعور. يجب أن تكون الإيموجي ذات صلة بالسياق وتضيف لمسة فنية رقيقة دون مبالغة.";

const NO_EXTRAS: &str =
    "لا تقم بإضافة أي مقدمات، أو ملاحظات، أو شروحات، أو تعليقات، أو تنسيق markdown.";

/// Inputs for a poem request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemRequest {
    /// Name of the person the poem is for.
    pub name: String,
    /// Gender of the person.
    pub gender: Gender,
    /// Language register.
    pub language: PoemLanguage,
    /// Whether emoji should be woven into the verses.
    pub include_emojis: bool,
}

/// Mode-specific input captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitInput {
    /// Free text for one of the three text modes.
    Text {
        /// Spellcheck, Roqaa or Emoji.
        mode: Mode,
        /// Raw user text.
        text: String,
    },
    /// Poem attributes.
    Poem(PoemRequest),
}

impl SubmitInput {
    /// Returns the mode this input belongs to.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Text { mode, .. } => *mode,
            Self::Poem(_) => Mode::Poem,
        }
    }
}

/// Builds model requests for a fixed model identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    model: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl PromptBuilder {
    /// Creates a builder that targets `model`.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Returns the configured model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Builds the request for any submit input.
    ///
    /// Returns `None` when the decisive field is blank.
    #[must_use]
    pub fn build(&self, input: &SubmitInput) -> Option<ModelRequest> {
        match input {
            SubmitInput::Text { mode, text } => match mode {
                Mode::Spellcheck => self.spellcheck(text),
                Mode::Roqaa => self.roqaa(text),
                Mode::Emoji => self.emoji(text),
                // Poem input always arrives as `SubmitInput::Poem`.
                Mode::Poem => None,
            },
            SubmitInput::Poem(poem) => self.poem(poem),
        }
    }

    /// Proof-reading prompt.
    #[must_use]
    pub fn spellcheck(&self, text: &str) -> Option<ModelRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let prompt = format!(
            "مهمتك هي أن تكون مدققًا لغويًا خبيرًا للغة العربية. قم بمراجعة النص التالي وتصحيح جميع الأخطاء الإملائية والنحوية وعلامات الترقيم. إذا كانت هناك جمل غير واضحة أو تفتقر إلى سلاسة الصياغة، قم بتحسينها مع الحفاظ التام على المعنى الأصلي وأسلوب الكاتب.\n\
             يجب أن يكون الناتج هو النص العربي المصحح بالكامل فقط. {NO_EXTRAS}\n\
             إذا كان النص الأصلي صحيحًا تمامًا ولا يحتاج إلى أي تعديل، فأعد النص الأصلي كما هو بالضبط.\n\
             \n\
             النص المطلوب تصحيحه:\n\
             {text}"
        );
        Some(self.request(prompt))
    }

    /// Roqaa restyling prompt.
    #[must_use]
    pub fn roqaa(&self, text: &str) -> Option<ModelRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let prompt = format!(
            "قم بتحويل النص العربي التالي إلى أسلوب الكتابة بخط الرقعة. يجب أن يكون الناتج هو النص المحول فقط. {NO_EXTRAS} إذا لم يكن التحويل ممكنًا بشكل جيد، أو كان النص المدخل غير عربي، أو كان النص فارغًا، فأعد النص الأصلي كما هو أو نصًا فارغًا إذا كان الإدخال فارغًا.\n\
             \n\
             النص المطلوب تحويله:\n\
             {text}"
        );
        Some(self.request(prompt))
    }

    /// Emoji suggestion prompt.
    #[must_use]
    pub fn emoji(&self, text: &str) -> Option<ModelRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let prompt = format!(
            "مهمتك هي إضافة لمسة تعبيرية إلى النص العربي التالي عن طريق اقتراح ودمج إيموجي (رموز تعبيرية) مناسبة بشكل طبيعي داخل النص أو في نهاية الجمل/العبارات ذات الصلة. يجب أن تكون الإيموجي المقترحة ذات صلة بالسياق وتعزز معنى النص أو الشعور الذي يعبر عنه. لا تبالغ في استخدام الإيموجي. إذا كان النص قصيراً جداً أو لا يمكن اقتراح إيموجي مناسب له، يمكنك إعادة النص الأصلي كما هو.\n\
             يجب أن يكون الناتج هو النص الأصلي مع الإيموجي المقترحة مدمجة فيه. {NO_EXTRAS}\n\
             \n\
             النص:\n\
             {text}"
        );
        Some(self.request(prompt))
    }

    /// Poem generation prompt.
    #[must_use]
    pub fn poem(&self, poem: &PoemRequest) -> Option<ModelRequest> {
        if poem.name.trim().is_empty() {
            return None;
        }
        let name = &poem.name;
        let descriptor = poem.gender.descriptor();

        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "اكتب قصيدة جميلة ومناسبة للشخص المسمى \"{name}\". هذا الشخص هو {descriptor}."
        );
        let _ = writeln!(prompt, "{}", poem.language.instruction());
        prompt.push_str(
            "القصيدة يجب أن تكون إيجابية وراقية، ويمكن أن تكون في شكل مدح أو تمنيات طيبة أو وصف لصفات حميدة قد ترتبط بالاسم أو بالجنس المذكور بشكل عام.\n",
        );
        prompt.push_str(
            "تجنب تكرار اسم الشخص بشكل مبالغ فيه داخل القصيدة، يكفي ذكره مرة أو مرتين بشكل طبيعي.\n",
        );
        if poem.include_emojis {
            let _ = writeln!(prompt, "{POEM_EMOJI_INSTRUCTION}");
        }
        prompt.push_str(
            "الناتج يجب أن يكون القصيدة فقط، بدون أي مقدمات أو عناوين خارجية أو تعليقات أو تنسيق markdown.\n\n",
        );
        let _ = writeln!(prompt, "الاسم: {name}");
        let _ = writeln!(prompt, "الجنس: {descriptor}");
        let _ = writeln!(prompt, "اللغة المطلوبة: {}", poem.language.register_name());
        prompt.push_str(if poem.include_emojis {
            "مع تضمين إيموجي\n"
        } else {
            "بدون إيموجي\n"
        });

        Some(self.request(prompt))
    }

    fn request(&self, prompt: String) -> ModelRequest {
        ModelRequest {
            model: self.model.clone(),
            prompt,
        }
    }
}
