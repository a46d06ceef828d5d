// ABOUTME: Interactive prompt capability: Prompt/PromptKey types and the Prompter trait.
// ABOUTME: Ships a terminal prompter, a preset-answer wrapper, and a scripted prompter.

use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, Write};

/// Identifies which question the pipeline is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    TableSelector,
    ContainerSelector,
    ContainerChoice,
    Columns,
    Format,
}

/// One interactive question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub key: PromptKey,
    pub message: String,
    pub default: Option<String>,
}

impl Prompt {
    pub fn new(key: PromptKey, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Something that can answer prompts.
///
/// `None` is the explicit cancellation value; the pipeline aborts on it.
pub trait Prompter {
    fn ask(&mut self, prompt: &Prompt) -> Option<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        (**self).ask(prompt)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        (**self).ask(prompt)
    }
}

/// Line-oriented prompter over any reader/writer pair (stdin/stderr in the CLI).
///
/// End of input cancels. A blank line accepts the default, or yields an
/// empty answer when the prompt has none.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        let shown = match &prompt.default {
            Some(d) => write!(self.output, "{} [{}]: ", prompt.message, d),
            None => write!(self.output, "{}: ", prompt.message),
        };
        if shown.and_then(|_| self.output.flush()).is_err() {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(['\r', '\n']);
                if answer.trim().is_empty() {
                    Some(prompt.default.clone().unwrap_or_default())
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }
}

/// Answers some prompts from presets and delegates the rest.
pub struct PresetPrompter<P> {
    presets: HashMap<PromptKey, String>,
    inner: P,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(inner: P) -> Self {
        Self {
            presets: HashMap::new(),
            inner,
        }
    }

    /// Pre-answer `key`. A `None` value leaves the prompt to the inner prompter.
    pub fn preset(mut self, key: PromptKey, answer: Option<impl Into<String>>) -> Self {
        if let Some(answer) = answer {
            self.presets.insert(key, answer.into());
        }
        self
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        match self.presets.get(&prompt.key) {
            Some(answer) => {
                tracing::debug!(key = ?prompt.key, answer = %answer, "using preset answer");
                Some(answer.clone())
            }
            None => self.inner.ask(prompt),
        }
    }
}

/// Accepts every default without reading anything; prompts without a
/// default are cancelled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        prompt.default.clone()
    }
}

/// Replays a fixed list of answers in order, then cancels.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    asked: Vec<PromptKey>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue an explicit cancellation.
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Keys of the prompts asked so far, in order.
    pub fn asked(&self) -> &[PromptKey] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        self.asked.push(prompt.key);
        self.answers.pop_front().flatten()
    }
}
