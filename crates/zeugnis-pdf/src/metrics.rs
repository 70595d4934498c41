//! Helvetica glyph widths
//!
//! Widths are in thousandths of an em, taken from the standard Helvetica
//! AFM. The table covers ASCII 0x20..=0x7E; index = (char as usize) - 32.

use crate::config::MM_PER_PT;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
      556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    //  :    ;    <    =    >    ?     @
      278, 278, 584, 584, 584, 556, 1015,
    // A-Z
      667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
      722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    //  [    \    ]    ^    _    `
      278, 278, 278, 469, 556, 333,
    // a-z
      556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
      556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    //  {    |    }    ~
      334, 260, 334, 584,
];

/// Width used for characters the table does not know
const FALLBACK_WIDTH: u16 = 556;

/// Cap height in thousandths of an em
pub const CAP_HEIGHT: u16 = 718;

/// Width of one character in thousandths of an em
pub fn char_width(c: char) -> u16 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        return HELVETICA[code - 32];
    }
    match c {
        'ß' => 611,
        '•' => 350,
        '–' => 556,
        '—' => 1000,
        '„' | '“' | '”' => 333,
        '€' => 556,
        _ => match base_letter(c) {
            Some(base) => HELVETICA[base as usize - 32],
            None => FALLBACK_WIDTH,
        },
    }
}

/// Accented Latin letters are as wide as their base letter
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => return None,
    };
    Some(base)
}

/// Width of `text` in thousandths of an em
pub fn measure_str(text: &str) -> u32 {
    text.chars().map(|c| u32::from(char_width(c))).sum()
}

/// Width of `text` set at `font_size_pt`, in millimetres
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    measure_str(text) as f32 / 1000.0 * font_size_pt * MM_PER_PT
}
