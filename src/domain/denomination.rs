use crate::domain::cash::Cash;
use crate::error::{MintError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Legal tender data for one country's currency.
///
/// The `label` field carries the human-readable factory name explicitly so
/// nothing ever needs to derive it from a type name.
#[derive(Debug)]
pub struct DenominationTable {
    pub currency: &'static str,
    pub label: &'static str,
    pub coins: &'static [Decimal],
    pub banknotes: &'static [Decimal],
}

impl DenominationTable {
    /// Mints cash of the requested value.
    ///
    /// Coin membership is checked before banknote membership. Matching is
    /// exact decimal equality against the table, no tolerance.
    pub fn create_cash(&self, value: Decimal) -> Result<Cash> {
        if self.coins.contains(&value) {
            Ok(Cash::coin(value, self.currency))
        } else if self.banknotes.contains(&value) {
            Ok(Cash::banknote(value, self.currency))
        } else {
            Err(MintError::InvalidDenomination {
                value,
                currency: self.currency.to_string(),
            })
        }
    }
}

static THAI_COINS: [Decimal; 6] = [
    dec!(0.25),
    dec!(0.5),
    dec!(1),
    dec!(2),
    dec!(5),
    dec!(10),
];
static THAI_BANKNOTES: [Decimal; 5] = [dec!(20), dec!(50), dec!(100), dec!(500), dec!(1000)];

static MALAY_COINS: [Decimal; 4] = [dec!(0.01), dec!(0.1), dec!(0.2), dec!(0.5)];
static MALAY_BANKNOTES: [Decimal; 6] = [
    dec!(1),
    dec!(5),
    dec!(10),
    dec!(20),
    dec!(50),
    dec!(100),
];

pub static THAILAND: DenominationTable = DenominationTable {
    currency: "Baht",
    label: "Thai",
    coins: &THAI_COINS,
    banknotes: &THAI_BANKNOTES,
};

pub static MALAYSIA: DenominationTable = DenominationTable {
    currency: "Ringgit",
    label: "Malay",
    coins: &MALAY_COINS,
    banknotes: &MALAY_BANKNOTES,
};
