//! Hint catalogs.
//!
//! Every piece of text the tutor shows lives in a [`Catalog`], one per [`Language`]. Detectors
//! pick the [`HintPair`] for the pattern they matched, and the orchestrator picks the gentle or
//! the escalated half of the pair depending on the streak.

use std::{fmt, str::FromStr};

/// A gentle hint and the more insistent hint shown once the same misconception repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPair {
    pub base: &'static str,
    pub escalated: &'static str,
}

/// All user-facing text for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    /// `d/dx(x^2) = x`
    pub power_rule_literal: HintPair,

    /// `d/dx(x^n) = x^(n-1)`
    pub power_rule_general: HintPair,

    /// `(a+b)^2 = a^2+b^2`
    pub binomial_literal: HintPair,

    /// `(u+v)^2 = u^2+v^2`
    pub binomial_general: HintPair,

    /// Any equation whose expanded difference is missing a `2uv` cross term.
    pub binomial_symbolic: HintPair,

    /// Shown when no misconception matched but both sides of the equation differ.
    pub sides_unequal: &'static str,

    /// Shown when nothing more specific applies.
    pub neutral: &'static str,

    pub banner: &'static str,
    pub instructions: &'static str,
    pub prompt: &'static str,
    pub hint_prefix: &'static str,
    pub farewell: &'static str,
}

pub static ENGLISH: Catalog = Catalog {
    power_rule_literal: HintPair {
        base: "It looks like the coefficient in front of the power went missing. What should the leading constant of d/dx(x^n) be?",
        escalated: "You keep dropping the leading coefficient when differentiating a power. Write out d/dx(x^n) = n·x^(n-1) in full and check every step.",
    },
    power_rule_general: HintPair {
        base: "When the exponent drops by one, the original exponent has to move in front as a coefficient. Check whether the leading coefficient is missing.",
        escalated: "The leading coefficient is missing again: write down the general formula, substitute n step by step, and make sure no factor or sign is left out.",
    },
    binomial_literal: HintPair {
        base: "Recall the binomial expansion: which mixed term should (a+b)^2 contain?",
        escalated: "You have left out the cross term 2ab again. Expand the square completely and label the coefficient of every term before combining.",
    },
    binomial_general: HintPair {
        base: "The middle 2ab term disappeared while expanding the square. Check the binomial theorem once more.",
        escalated: "The Freshman's Dream keeps showing up: write (u+v)^2 = u^2 + 2uv + v^2 and check the degree of every term.",
    },
    binomial_symbolic: HintPair {
        base: "It looks like the mixed term 2ab is missing. Try expanding fully and check every term.",
        escalated: "The mixed term is missing again: expand step by step and write out where 2·(first term)·(second term) comes from.",
    },
    sides_unequal: "The two sides do not seem to be equal. Try deriving it again and look for a dropped term or a misplaced sign.",
    neutral: "No specific misconception detected. Keep going, or share more of your steps.",
    banner: "=== Diagnostic Tutor ===",
    instructions: "Enter a math expression for the tutor to diagnose. Type 'exit' to leave.",
    prompt: "expression> ",
    hint_prefix: "Tutor hint: ",
    farewell: "Ending the session. Goodbye.",
};

pub static TRADITIONAL_CHINESE: Catalog = Catalog {
    power_rule_literal: HintPair {
        base: "你似乎忘了冪次前的係數，回想一下 d/dx(x^n) 的前導常數應該是多少？",
        escalated: "你持續遺漏冪次求導的前導係數，請完整寫出 d/dx(x^n)=n·x^(n-1) 並檢查每一步。",
    },
    power_rule_general: HintPair {
        base: "冪次下降時需要把原本的指數乘到前面，確認一下前導係數是否遺漏。",
        escalated: "連續遺漏前導係數：請寫出一般公式並逐步帶入 n，確認計算與符號都未省略。",
    },
    binomial_literal: HintPair {
        base: "請回想二項式展開公式：(a+b)^2 應該包含哪個混合項？",
        escalated: "你連續遺漏了二項式的交叉項 2ab，請完整展開並標示每一項係數後再合併。",
    },
    binomial_general: HintPair {
        base: "展開平方時中間的 2ab 被拿掉了，再檢查一次完整的二項式定理。",
        escalated: "持續出現 Freshman's Dream：請寫出 (u+v)^2 = u^2 + 2uv + v^2 並檢驗各項次。",
    },
    binomial_symbolic: HintPair {
        base: "好像少了混合項 2ab，試著完整展開後檢查每一項。",
        escalated: "多次缺少混合項：請逐步展開並明確寫出 2·(第一項)·(第二項) 的來源。",
    },
    sides_unequal: "等式兩側似乎不相等，嘗試重新推導並檢查是否有省略或符號錯置。",
    neutral: "目前未偵測到特定迷思，請繼續嘗試或提供更多步驟。",
    banner: "=== 診斷導師 ===",
    instructions: "輸入一條數學算式讓導師診斷，輸入 'exit' 以離開。",
    prompt: "算式> ",
    hint_prefix: "導師提示：",
    farewell: "結束對話，再見。",
};

/// The languages a [`Catalog`] is available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl Language {
    /// Returns the catalog for this language.
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::English => &ENGLISH,
            Self::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::TraditionalChinese => write!(f, "zh-hant"),
        }
    }
}

/// The error returned when parsing an unknown [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language `{}` (expected `en` or `zh`)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "zh" | "zh-tw" | "zh-hant" | "chinese" => Ok(Self::TraditionalChinese),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns every string in the catalog.
    fn all_text(catalog: &Catalog) -> Vec<&'static str> {
        let pairs = [
            catalog.power_rule_literal,
            catalog.power_rule_general,
            catalog.binomial_literal,
            catalog.binomial_general,
            catalog.binomial_symbolic,
        ];
        pairs.iter()
            .flat_map(|pair| [pair.base, pair.escalated])
            .chain([
                catalog.sides_unequal,
                catalog.neutral,
                catalog.banner,
                catalog.instructions,
                catalog.prompt,
                catalog.hint_prefix,
                catalog.farewell,
            ])
            .collect()
    }

    #[test]
    fn catalogs_are_complete() {
        for language in [Language::English, Language::TraditionalChinese] {
            let text = all_text(language.catalog());
            assert!(text.iter().all(|s| !s.trim().is_empty()), "{} has an empty entry", language);

            let mut unique = text.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), text.len(), "{} repeats an entry", language);
        }
    }

    #[test]
    fn parse_language() {
        assert_eq!("en".parse(), Ok(Language::English));
        assert_eq!("English".parse(), Ok(Language::English));
        assert_eq!("ZH-TW".parse(), Ok(Language::TraditionalChinese));
        assert_eq!(" zh ".parse(), Ok(Language::TraditionalChinese));
        assert_eq!("fr".parse::<Language>(), Err(UnknownLanguage("fr".to_string())));
    }

    #[test]
    fn language_round_trip_through_display() {
        for language in [Language::English, Language::TraditionalChinese] {
            assert_eq!(language.to_string().parse(), Ok(language));
        }
    }
}
