/// Grammatical forms of a counted noun: "1 рубль", "2 рубля", "5 рублей".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

pub const RUBLES: Forms = Forms {
    one: "рубль",
    few: "рубля",
    many: "рублей",
};

pub const KOPECKS: Forms = Forms {
    one: "копейка",
    few: "копейки",
    many: "копеек",
};

pub const THOUSANDS: Forms = Forms {
    one: "тысяча",
    few: "тысячи",
    many: "тысяч",
};

pub const MILLIONS: Forms = Forms {
    one: "миллион",
    few: "миллиона",
    many: "миллионов",
};

pub const BILLIONS: Forms = Forms {
    one: "миллиард",
    few: "миллиарда",
    many: "миллиардов",
};

pub const TRILLIONS: Forms = Forms {
    one: "триллион",
    few: "триллиона",
    many: "триллионов",
};

/// Pick the form that agrees with `n`. Only the last two digits matter;
/// 11..=19 always take the `many` form.
pub fn plural(n: u128, forms: &Forms) -> &'static str {
    let n = n % 100;
    if (11..=19).contains(&n) {
        return forms.many;
    }
    match n % 10 {
        1 => forms.one,
        2..=4 => forms.few,
        _ => forms.many,
    }
}
