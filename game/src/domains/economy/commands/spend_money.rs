use crate::economy::Economy::BalanceChanged;
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn spend_money(
        &mut self,
        cost: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if !self.can_afford(cost) {
            return Err(EconomyError::NotEnoughMoney {
                cost,
                balance: self.balance,
            });
        }
        let operation = move || {
            self.balance -= cost;
            vec![BalanceChanged {
                balance: self.balance,
            }]
        };
        Ok(operation)
    }
}
