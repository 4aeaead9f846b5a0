use crate::economy::EconomyDomain;

impl EconomyDomain {
    pub fn load_balance(&mut self, balance: u32) {
        self.balance = balance;
    }
}
