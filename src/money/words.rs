use super::plural::{plural, Forms, BILLIONS, MILLIONS, THOUSANDS, TRILLIONS};

const ONES_MASCULINE: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const ONES_FEMININE: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const TENS: [&str; 10] = [
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
    "восемьдесят", "девяносто",
];

const HUNDREDS: [&str; 10] = [
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот",
    "девятьсот",
];

/// Scale words above the units group, lowest first. Only thousands are feminine.
const SCALES: [(Forms, bool); 4] = [
    (THOUSANDS, true),
    (MILLIONS, false),
    (BILLIONS, false),
    (TRILLIONS, false),
];

const LIMIT: u128 = 1_000_000_000_000_000;

/// Spell a non-negative integer in Russian, masculine gender for the units
/// group ("двадцать один", "одна тысяча"). Values of a quadrillion and up are
/// rendered as digits.
pub fn spell(n: u128) -> String {
    if n == 0 {
        return "ноль".to_string();
    }
    if n >= LIMIT {
        return n.to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words: Vec<&'static str> = Vec::new();
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if index == 0 {
            spell_group(group, false, &mut words);
        } else {
            let (forms, feminine) = &SCALES[index - 1];
            spell_group(group, *feminine, &mut words);
            words.push(plural(group as u128, forms));
        }
    }

    words.join(" ")
}

fn spell_group(group: usize, feminine: bool, words: &mut Vec<&'static str>) {
    let hundreds = group / 100;
    let tail = group % 100;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    if (10..20).contains(&tail) {
        words.push(TEENS[tail - 10]);
        return;
    }
    if tail >= 20 {
        words.push(TENS[tail / 10]);
    }
    let ones = tail % 10;
    if ones > 0 {
        let table = if feminine { &ONES_FEMININE } else { &ONES_MASCULINE };
        words.push(table[ones]);
    }
}

/// Upper-case the first character, as amounts are written at sentence start.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
