pub static WRAP_WIDTH: usize = 80;

/// Chops `input` into lines of exactly `width` characters, the last line holding the remainder.
///
/// Counts characters, not bytes, and ignores word boundaries. Input whose length is a
/// multiple of `width` ends with a newline followed by an empty last line.
/// A `width` of 0 leaves the input untouched.
#[must_use]
pub fn wrap_text(input: &str, width: usize) -> String {
    if width == 0 {
        return input.to_string();
    }

    let chars = input.chars().collect::<Vec<_>>();
    let mut output = String::with_capacity(input.len() + chars.len() / width);

    for line in chars.chunks(width) {
        output.extend(line);
        if line.len() == width {
            output.push('\n');
        }
    }

    output
}
