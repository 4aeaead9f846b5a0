use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct EconomyDomain {
    pub balance: u32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Economy {
    BalanceChanged { balance: u32 },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum EconomyError {
    NotEnoughMoney { cost: u32, balance: u32 },
}
