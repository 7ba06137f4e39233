use crate::domain::cash::Cash;
use crate::domain::denomination::{DenominationTable, MALAYSIA, THAILAND};
use crate::error::Result;
use rust_decimal::Decimal;

/// A factory that mints one country's money.
///
/// Behavior is pure data lookup: implementors only point at their
/// [`DenominationTable`] and the defaults do the rest.
pub trait MoneyFactory: Send + Sync {
    fn table(&self) -> &'static DenominationTable;

    /// Display name of the currency minted by this factory.
    fn currency(&self) -> &'static str {
        self.table().currency
    }

    /// Mints cash of the requested value, or fails if the value is not a
    /// legal denomination for this currency.
    fn create_cash(&self, value: Decimal) -> Result<Cash> {
        self.table().create_cash(value)
    }

    fn describe(&self) -> String {
        format!("Factory for {} money", self.table().label)
    }
}

pub struct ThaiMoneyFactory;

impl MoneyFactory for ThaiMoneyFactory {
    fn table(&self) -> &'static DenominationTable {
        &THAILAND
    }
}

pub struct MalayMoneyFactory;

impl MoneyFactory for MalayMoneyFactory {
    fn table(&self) -> &'static DenominationTable {
        &MALAYSIA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cash::CashKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_names() {
        assert_eq!(ThaiMoneyFactory.currency(), "Baht");
        assert_eq!(MalayMoneyFactory.currency(), "Ringgit");
    }

    #[test]
    fn test_describe() {
        assert_eq!(ThaiMoneyFactory.describe(), "Factory for Thai money");
        assert_eq!(MalayMoneyFactory.describe(), "Factory for Malay money");
    }

    #[test]
    fn test_create_cash_delegates_to_table() {
        let cash = ThaiMoneyFactory.create_cash(dec!(1000)).unwrap();
        assert_eq!(cash.kind, CashKind::Banknote);
        assert_eq!(cash.currency, "Baht");
    }

    #[test]
    fn test_currency_stable_across_creations() {
        let factory = MalayMoneyFactory;
        for _ in 0..3 {
            factory.create_cash(dec!(0.5)).unwrap();
        }
        assert_eq!(factory.currency(), "Ringgit");
    }

    #[test]
    fn test_create_cash_idempotent() {
        let factory = ThaiMoneyFactory;
        let first = factory.create_cash(dec!(5)).unwrap();
        let second = factory.create_cash(dec!(5)).unwrap();
        assert_eq!(first, second);
    }
}
