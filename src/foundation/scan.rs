//! Byte cursor shared by the small hand-written parsers (colors, triangle paths).

#[derive(Clone, Copy, Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn at(input: &'a str, pos: usize) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: pos.min(input.len()),
        }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.input[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// One or more ASCII digits.
    pub(crate) fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.input[start..self.pos])
    }

    /// Unsigned integer made of one or more digits.
    pub(crate) fn uint(&mut self) -> Option<u32> {
        let save = self.pos;
        match self.digits().and_then(|s| s.parse().ok()) {
            Some(v) => Some(v),
            None => {
                self.pos = save;
                None
            }
        }
    }

    /// Optional minus followed by a run of digits and dots, parsed as `f64`.
    pub(crate) fn decimal(&mut self) -> Option<f64> {
        let start = self.pos;
        self.eat(b'-');
        let body = self.pos;
        while self.pos < self.bytes.len()
            && (self.bytes[self.pos].is_ascii_digit() || self.bytes[self.pos] == b'.')
        {
            self.pos += 1;
        }
        let parsed = if self.pos > body {
            self.input[start..self.pos]
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        } else {
            None
        };
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/scan.rs"]
mod tests;
