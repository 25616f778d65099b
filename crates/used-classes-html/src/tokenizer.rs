/// Splits a `class` attribute value into class names.
///
/// The value is a whitespace-separated list of classes that may interleave
/// template expressions in curly braces, e.g. `card {{ extra }} shadow`.
/// Every character at a brace depth other than zero is dropped along with the
/// braces themselves, so template expressions never produce class names.
///
/// The depth is a plain signed counter: an unmatched `}` drives it negative
/// and a later `{` can bring it back to zero. Malformed input never fails, it
/// just drops more or less text.
pub struct ClassListTokenizer {
    /// The attribute value being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Count of `{` minus count of `}` seen so far
    brace_depth: i64,
    /// Class name being accumulated
    current: String,
    /// Collected class names
    tokens: Vec<String>,
}

impl ClassListTokenizer {
    /// Create a new tokenizer for the given attribute value.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            brace_depth: 0,
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input, collecting class names.
    pub fn run(&mut self) {
        while let Some(c) = self.consume() {
            self.step(c);
        }
        // A trailing separator flushes the last class. Like any other
        // character it is dropped while inside braces, so a class followed
        // by an unclosed `{` is never emitted.
        self.step(' ');
    }

    /// Return the collected class names.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Return a reference to the collected class names.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Brace depth reached after the input consumed so far.
    #[must_use]
    pub const fn brace_depth(&self) -> i64 {
        self.brace_depth
    }

    /// Whether every `{` consumed so far has been closed.
    ///
    /// A value like `a }b{ c` is balanced even though its depth dipped below
    /// zero on the way.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.brace_depth == 0
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn step(&mut self, c: char) {
        match c {
            '{' => self.brace_depth += 1,
            '}' => self.brace_depth -= 1,
            _ if self.brace_depth != 0 => {}
            c if is_class_separator(c) => self.flush(),
            c => self.current.push(c),
        }
    }

    fn flush(&mut self) {
        let class = self.current.trim();
        if !class.is_empty() {
            self.tokens.push(class.to_owned());
        }
        self.current.clear();
    }
}

/// Unicode whitespace, plus the ASCII information separators (U+001C to
/// U+001F) that template engines treat as whitespace too.
fn is_class_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Split a class attribute value into class names, skipping any template
/// expressions contained in curly braces.
///
/// ```
/// use used_classes_html::split_class_list;
///
/// assert_eq!(split_class_list("btn {{ variant }} active"), ["btn", "active"]);
/// ```
#[must_use]
pub fn split_class_list(class_list: &str) -> Vec<String> {
    let mut tokenizer = ClassListTokenizer::new(class_list);
    tokenizer.run();
    tokenizer.into_tokens()
}
