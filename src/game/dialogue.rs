//! Typewriter dialogue reveal
//!
//! Paces a node's dialogue one character per tick, line by line. The front
//! end ticks it on a timer, and the player can skip ahead. Loading a new
//! node drops the old reveal entirely; a fresh one starts from nothing.

/// Progressive reveal state for one node's dialogue
#[derive(Debug, Clone)]
pub struct DialogueReveal {
    lines: Vec<Vec<char>>,
    line: usize,
    shown: usize,
}

impl DialogueReveal {
    pub fn new(dialogue: &[String]) -> Self {
        Self {
            lines: dialogue.iter().map(|l| l.chars().collect()).collect(),
            line: 0,
            shown: 0,
        }
    }

    /// Reveal one more character of the current line
    pub fn tick(&mut self) {
        if let Some(line) = self.lines.get(self.line) {
            if self.shown < line.len() {
                self.shown += 1;
            }
        }
    }

    /// Is the current line fully revealed?
    pub fn line_complete(&self) -> bool {
        self.lines
            .get(self.line)
            .map_or(true, |l| self.shown >= l.len())
    }

    /// Has every line been revealed and advanced past?
    pub fn complete(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Finish the current line immediately
    pub fn skip(&mut self) {
        if let Some(line) = self.lines.get(self.line) {
            self.shown = line.len();
        }
    }

    /// Player pressed next: finish the line if it is still typing,
    /// otherwise move to the next one. Returns true once all dialogue
    /// has been presented.
    pub fn advance(&mut self) -> bool {
        if !self.line_complete() {
            self.skip();
            return false;
        }
        if self.line < self.lines.len() {
            self.line += 1;
            self.shown = 0;
        }
        self.complete()
    }

    /// Lines to draw: every finished line plus the partial current one
    pub fn visible_lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self.lines[..self.line.min(self.lines.len())]
            .iter()
            .map(|l| l.iter().collect())
            .collect();
        if let Some(line) = self.lines.get(self.line) {
            out.push(line[..self.shown].iter().collect());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(lines: &[&str]) -> DialogueReveal {
        DialogueReveal::new(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn ticks_reveal_one_character_at_a_time() {
        let mut r = reveal(&["abc"]);
        assert_eq!(r.visible_lines(), ["".to_string()]);
        r.tick();
        assert_eq!(r.visible_lines(), ["a".to_string()]);
        r.tick();
        r.tick();
        assert!(r.line_complete());
        r.tick();
        assert_eq!(r.visible_lines(), ["abc".to_string()]);
    }

    #[test]
    fn advance_while_typing_skips_to_the_end_of_the_line() {
        let mut r = reveal(&["hello", "world"]);
        r.tick();
        assert!(!r.advance());
        assert!(r.line_complete());
        assert_eq!(r.visible_lines(), ["hello".to_string()]);
    }

    #[test]
    fn advance_past_the_last_line_reports_completion() {
        let mut r = reveal(&["one", "two"]);
        r.skip();
        assert!(!r.advance());
        r.skip();
        assert!(r.advance());
        assert!(r.complete());
        assert_eq!(r.visible_lines(), ["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn multibyte_text_reveals_by_character() {
        let mut r = reveal(&["ναι"]);
        r.tick();
        assert_eq!(r.visible_lines(), ["ν".to_string()]);
        r.tick();
        r.tick();
        assert!(r.line_complete());
    }

    #[test]
    fn empty_dialogue_is_immediately_complete_after_one_advance() {
        let mut r = reveal(&[]);
        assert!(r.line_complete());
        assert!(r.complete());
        let _ = r.advance();
        assert!(r.complete());
    }
}
