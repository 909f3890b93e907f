#![forbid(unsafe_code)]

//! Full-width → narrow normalization.
//!
//! The printer's Font B cell grid is tuned for halfwidth glyphs, so
//! full-width presentation forms are folded to their narrow counterparts
//! before any width measurement or wrapping happens. Covered mappings:
//!
//! - Fullwidth ASCII variants (U+FF01–U+FF5E) → ASCII
//! - Fullwidth white parentheses (U+FF5F/U+FF60) → ⦅ ⦆
//! - Fullwidth currency/signs (U+FFE0–U+FFE6) → their narrow forms
//! - Ideographic space (U+3000) → space
//! - CJK punctuation with dedicated halfwidth forms (｡ ｢ ｣ ､ ･ ｰ)
//! - Katakana → halfwidth katakana, with voiced and semi-voiced letters
//!   decomposing to the base letter plus a halfwidth sound mark (ガ → ｶﾞ)
//! - Hangul compatibility jamo (U+3131–U+3164) → halfwidth Hangul
//!
//! Code points with no halfwidth counterpart (ideographs, hiragana, the
//! small kana ヮ ヵ ヶ, ヸ ヹ) pass through unchanged, and the mapping
//! is idempotent (narrow output is never re-mapped).
//!
//! Normalization runs *before* width classification, so a code point
//! that renders wide but has a narrow equivalent is measured at its
//! narrow width of 1. The narrow form is what actually reaches the
//! device, so the narrow width is the one that matters for wrapping.

/// Map every full-width presentation form in `text` to its narrow or
/// halfwidth counterpart.
///
/// # Example
/// ```
/// use tapeform_text::to_narrow;
///
/// assert_eq!(to_narrow("ＡＢＣ１２３"), "ABC123");
/// assert_eq!(to_narrow("カタカナ"), "ｶﾀｶﾅ");
/// assert_eq!(to_narrow("ガ"), "ｶﾞ");
/// ```
#[must_use]
pub fn to_narrow(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_narrow(c, &mut out);
    }
    out
}

/// Offset between the fullwidth ASCII variants block and ASCII proper.
const FULLWIDTH_ASCII_OFFSET: u32 = 0xFEE0;

fn push_narrow(c: char, out: &mut String) {
    match c {
        '\u{3000}' => out.push(' '),
        // U+FF01..=U+FF5E sit at a constant offset from U+0021..=U+007E,
        // so the result is always a valid ASCII char.
        '\u{FF01}'..='\u{FF5E}' => out.push((c as u32 - FULLWIDTH_ASCII_OFFSET) as u8 as char),
        '｟' => out.push('⦅'),
        '｠' => out.push('⦆'),
        // Hangul compatibility jamo. The consonants are contiguous with
        // their halfwidth forms; the vowels map in blocks of six with
        // two-slot gaps in the halfwidth block.
        '\u{3131}'..='\u{314E}' => out.push(offset_char(c, '\u{3131}', '\u{FFA1}')),
        '\u{314F}'..='\u{3154}' => out.push(offset_char(c, '\u{314F}', '\u{FFC2}')),
        '\u{3155}'..='\u{315A}' => out.push(offset_char(c, '\u{3155}', '\u{FFCA}')),
        '\u{315B}'..='\u{3160}' => out.push(offset_char(c, '\u{315B}', '\u{FFD2}')),
        '\u{3161}'..='\u{3163}' => out.push(offset_char(c, '\u{3161}', '\u{FFDA}')),
        '\u{3164}' => out.push('\u{FFA0}'),
        '￠' => out.push('¢'),
        '￡' => out.push('£'),
        '￢' => out.push('¬'),
        '￣' => out.push('¯'),
        '￤' => out.push('¦'),
        '￥' => out.push('¥'),
        '￦' => out.push('₩'),
        _ => match narrow_kana(c) {
            Some(narrow) => out.push_str(narrow),
            None => out.push(c),
        },
    }
}

/// Shift `c` from a block starting at `from` into the block starting at
/// `to`. Caller guarantees the target block covers the shifted value.
fn offset_char(c: char, from: char, to: char) -> char {
    char::from_u32(c as u32 - from as u32 + to as u32).unwrap_or(c)
}

/// Halfwidth form of a katakana letter or CJK punctuation mark, or
/// `None` when the code point has no halfwidth counterpart.
fn narrow_kana(c: char) -> Option<&'static str> {
    let narrow = match c {
        '。' => "｡",
        '「' => "｢",
        '」' => "｣",
        '、' => "､",
        '・' => "･",
        'ー' => "ｰ",
        'ァ' => "ｧ",
        'ア' => "ｱ",
        'ィ' => "ｨ",
        'イ' => "ｲ",
        'ゥ' => "ｩ",
        'ウ' => "ｳ",
        'ェ' => "ｪ",
        'エ' => "ｴ",
        'ォ' => "ｫ",
        'オ' => "ｵ",
        'カ' => "ｶ",
        'ガ' => "ｶﾞ",
        'キ' => "ｷ",
        'ギ' => "ｷﾞ",
        'ク' => "ｸ",
        'グ' => "ｸﾞ",
        'ケ' => "ｹ",
        'ゲ' => "ｹﾞ",
        'コ' => "ｺ",
        'ゴ' => "ｺﾞ",
        'サ' => "ｻ",
        'ザ' => "ｻﾞ",
        'シ' => "ｼ",
        'ジ' => "ｼﾞ",
        'ス' => "ｽ",
        'ズ' => "ｽﾞ",
        'セ' => "ｾ",
        'ゼ' => "ｾﾞ",
        'ソ' => "ｿ",
        'ゾ' => "ｿﾞ",
        'タ' => "ﾀ",
        'ダ' => "ﾀﾞ",
        'チ' => "ﾁ",
        'ヂ' => "ﾁﾞ",
        'ッ' => "ｯ",
        'ツ' => "ﾂ",
        'ヅ' => "ﾂﾞ",
        'テ' => "ﾃ",
        'デ' => "ﾃﾞ",
        'ト' => "ﾄ",
        'ド' => "ﾄﾞ",
        'ナ' => "ﾅ",
        'ニ' => "ﾆ",
        'ヌ' => "ﾇ",
        'ネ' => "ﾈ",
        'ノ' => "ﾉ",
        'ハ' => "ﾊ",
        'バ' => "ﾊﾞ",
        'パ' => "ﾊﾟ",
        'ヒ' => "ﾋ",
        'ビ' => "ﾋﾞ",
        'ピ' => "ﾋﾟ",
        'フ' => "ﾌ",
        'ブ' => "ﾌﾞ",
        'プ' => "ﾌﾟ",
        'ヘ' => "ﾍ",
        'ベ' => "ﾍﾞ",
        'ペ' => "ﾍﾟ",
        'ホ' => "ﾎ",
        'ボ' => "ﾎﾞ",
        'ポ' => "ﾎﾟ",
        'マ' => "ﾏ",
        'ミ' => "ﾐ",
        'ム' => "ﾑ",
        'メ' => "ﾒ",
        'モ' => "ﾓ",
        'ャ' => "ｬ",
        'ヤ' => "ﾔ",
        'ュ' => "ｭ",
        'ユ' => "ﾕ",
        'ョ' => "ｮ",
        'ヨ' => "ﾖ",
        'ラ' => "ﾗ",
        'リ' => "ﾘ",
        'ル' => "ﾙ",
        'レ' => "ﾚ",
        'ロ' => "ﾛ",
        'ワ' => "ﾜ",
        'ヷ' => "ﾜﾞ",
        'ヲ' => "ｦ",
        'ヺ' => "ｦﾞ",
        'ン' => "ﾝ",
        'ヴ' => "ｳﾞ",
        '゛' | '\u{3099}' => "ﾞ",
        '゜' | '\u{309A}' => "ﾟ",
        _ => return None,
    };
    Some(narrow)
}
