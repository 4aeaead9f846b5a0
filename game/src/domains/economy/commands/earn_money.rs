use crate::economy::Economy::BalanceChanged;
use crate::economy::{Economy, EconomyDomain};

impl EconomyDomain {
    pub fn earn_money(&mut self, amount: u32) -> impl FnOnce() -> Vec<Economy> + '_ {
        move || {
            self.balance += amount;
            vec![BalanceChanged {
                balance: self.balance,
            }]
        }
    }
}
