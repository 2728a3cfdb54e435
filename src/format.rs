/// Converts a 24-hour time to a 12-hour clock string such as `1:05pm`.
///
/// Hours 0, 12 and 24 all read as `12`. Values outside `0..=24` are passed
/// through without correction.
pub fn to_clock_time(hours: i32, minutes: i32) -> String {
    let (hours, suffix) = match hours {
        0 | 24 => (12, "am"),
        12 => (12, "pm"),
        h if h > 12 => (h - 12, "pm"),
        h => (h, "am"),
    };

    format!("{hours}:{minutes:02}{suffix}")
}

/// Uppercases the first character of `word`. Absent or empty input yields an
/// empty string.
pub fn capitalize<'a, S: Into<Option<&'a str>>>(word: S) -> String {
    let Some(word) = word.into() else {
        return String::new();
    };

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-delimited word of `sentence`.
pub fn capitalize_words<'a, S: Into<Option<&'a str>>>(sentence: S) -> String {
    let Some(sentence) = sentence.into() else {
        return String::new();
    };

    sentence
        .split(' ')
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}
