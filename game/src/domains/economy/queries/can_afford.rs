use crate::economy::EconomyDomain;

impl EconomyDomain {
    pub fn can_afford(&self, cost: u32) -> bool {
        self.balance >= cost
    }
}
