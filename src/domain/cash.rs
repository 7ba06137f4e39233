use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CashKind {
    Coin,
    Banknote,
}

impl fmt::Display for CashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashKind::Coin => write!(f, "coin"),
            CashKind::Banknote => write!(f, "banknote"),
        }
    }
}

/// A single piece of physical money.
///
/// Immutable value object compared by value. Construction never validates;
/// a [`MoneyFactory`](crate::domain::factory::MoneyFactory) is responsible
/// for only handing out legal denominations.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Cash {
    pub value: Decimal,
    pub currency: String,
    pub kind: CashKind,
}

impl Cash {
    pub fn coin(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            kind: CashKind::Coin,
        }
    }

    pub fn banknote(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            kind: CashKind::Banknote,
        }
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.value, self.currency, self.kind)
    }
}
