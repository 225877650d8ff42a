//! Accumulating raw script text for a `<script>` block.

use crate::document::Inject;
use crate::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder {
    script: String,
}

impl Builder {
    pub fn new() -> Self {
        Builder { script: String::new() }
    }

    pub fn from_script(script: &str) -> Self {
        Builder { script: script.to_string() }
    }

    /// Appended as is, no separator is added.
    pub fn push(&mut self, script: &str) -> &mut Self {
        self.script.push_str(script);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl Inject for Builder {
    /// Inserts the `<script>` block before the last `</body>`, or
    /// appends it if there is none.
    fn inject(&self, dest: &mut String) {
        let block = format!("<script>\n{}\n</script>\n", self.script);
        match dest.rfind("</body>") {
            Some(pos) => {
                trace!("injecting script block at {pos}");
                dest.insert_str(pos, &block);
            }
            None => {
                trace!("no </body>, appending script block");
                dest.push_str(&block);
            }
        }
    }
}
