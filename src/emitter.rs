//! Text sink for the generated C program.
//!
//! Lines are tab-indented by the current block depth. A line is
//! assembled piece by piece while the translator recognizes the
//! source construct, then terminated with [`Emitter::end_line`].

const PRELUDE: &str = "#include <stdio.h>\n\nint main(void)\n{\n";
const EPILOGUE: &str = "\treturn 0;\n}\n";

/// Accumulates generated text and tracks block nesting.
#[derive(Debug)]
pub struct Emitter {
    out: String,
    depth: usize,
    line_open: bool,
}

impl Emitter {
    /// Start a program: writes the prelude and opens the `main` body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: PRELUDE.to_string(),
            depth: 1,
            line_open: false,
        }
    }

    /// Current block nesting depth (`1` directly inside `main`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Append a fragment to the current line, indenting it first if
    /// this is the start of the line.
    pub fn push(&mut self, fragment: &str) {
        if !self.line_open {
            for _ in 0..self.depth {
                self.out.push('\t');
            }
            self.line_open = true;
        }
        self.out.push_str(fragment);
    }

    /// Append a quoted C string literal followed by `\n`.
    pub fn push_string_literal(&mut self, text: &str) {
        self.push(&format!("\"{text}\\n\""));
    }

    pub fn end_line(&mut self) {
        self.out.push('\n');
        self.line_open = false;
    }

    /// Write a complete line at the current depth.
    pub fn line(&mut self, text: &str) {
        self.push(text);
        self.end_line();
    }

    /// Emit `{` and indent everything up to the matching
    /// [`Emitter::close_block`].
    pub fn open_block(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Close `main` and return the finished program.
    #[must_use]
    pub fn finish(mut self) -> String {
        if self.line_open {
            self.end_line();
        }
        self.out.push_str(EPILOGUE);
        self.out
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
