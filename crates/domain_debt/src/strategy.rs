//! Multi-debt payoff plans under the avalanche and snowball orderings

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{round_currency, Currency, DebtId, Money, MoneyError};

use crate::debt::Debt;

/// Which debt receives surplus payments first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Highest interest rate first
    #[default]
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl PayoffStrategy {
    /// Indices of `debts` in payment priority order
    ///
    /// Avalanche breaks rate ties by the smaller balance, snowball breaks
    /// balance ties by the higher rate; remaining ties keep input order.
    pub fn priority(&self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..debts.len()).collect();
        order.sort_by(|&a, &b| self.compare(&debts[a], &debts[b]));
        order
    }

    fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        let by_rate = b.annual_rate.cmp(&a.annual_rate);
        let by_balance = a.balance.amount().cmp(&b.balance.amount());
        match self {
            PayoffStrategy::Avalanche => by_rate.then(by_balance),
            PayoffStrategy::Snowball => by_balance.then(by_rate),
        }
    }
}

/// The month a debt reaches a zero balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffEntry {
    pub debt_id: DebtId,
    pub name: String,
    /// 1-based month index; 0 for a debt that starts at zero
    pub month: u32,
}

/// A debt's balance at the end of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtBalance {
    pub debt_id: DebtId,
    pub balance: Money,
}

/// Every debt's balance at the end of one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub month: u32,
    /// In priority order
    pub balances: Vec<DebtBalance>,
}

/// Result of simulating a payoff strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    /// Payment priority, first entry receives surplus payments first
    pub priority: Vec<DebtId>,
    /// Debts ordered by the month they are paid off
    pub schedule: Vec<PayoffEntry>,
    /// Debts still owing when the simulation horizon ends
    pub unpaid: Vec<DebtId>,
    /// Month the last debt is paid off, if every debt is
    pub months_to_debt_free: Option<u32>,
    /// Interest charged across the simulation
    pub total_interest: Money,
    /// Monthly balances, one row per simulated month
    pub timeline: Vec<BalanceRow>,
}

impl PayoffPlan {
    /// Month a debt is paid off under this plan
    pub fn payoff_month(&self, debt_id: DebtId) -> Option<u32> {
        self.schedule
            .iter()
            .find(|entry| entry.debt_id == debt_id)
            .map(|entry| entry.month)
    }

    /// The first debt to reach zero, if any
    pub fn first_paid_off(&self) -> Option<&PayoffEntry> {
        self.schedule.first()
    }

    pub fn is_debt_free(&self) -> bool {
        self.unpaid.is_empty()
    }
}

struct Account {
    index: usize,
    balance: Decimal,
    monthly_rate: Decimal,
    minimum: Decimal,
    closed_at: Option<u32>,
}

/// Simulates paying every debt month by month
///
/// Each month every open debt accrues interest (half-up to cents) and then
/// receives its minimum payment. The pool of `extra_payment` plus the minimums
/// freed by debts already paid off goes to open debts in priority order.
/// The simulation stops when every debt is paid or after `max_months`.
///
/// Debts are expected to be validated and share `extra_payment`'s currency.
/// Balances that outgrow `Decimal` range yield [`MoneyError::Overflow`].
pub fn simulate_payoff(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_payment: &Money,
    max_months: u32,
) -> Result<PayoffPlan, MoneyError> {
    let currency = extra_payment.currency();
    let order = strategy.priority(debts);

    let mut accounts: Vec<Account> = order
        .iter()
        .map(|&index| {
            let debt = &debts[index];
            let balance = debt.balance.amount();
            Account {
                index,
                balance,
                monthly_rate: debt.annual_rate.monthly(),
                minimum: debt.minimum_payment.amount(),
                closed_at: (balance <= Decimal::ZERO).then_some(0),
            }
        })
        .collect();

    let extra = extra_payment.amount().max(Decimal::ZERO);
    let mut total_interest = Decimal::ZERO;
    let mut timeline = Vec::new();
    let mut month = 0;

    while month < max_months && accounts.iter().any(|a| a.closed_at.is_none()) {
        month += 1;

        // Minimums of debts closed in earlier months roll into the pool
        let mut pool = extra
            + accounts
                .iter()
                .filter(|a| a.closed_at.is_some())
                .map(|a| a.minimum)
                .sum::<Decimal>();

        for account in accounts.iter_mut().filter(|a| a.closed_at.is_none()) {
            let interest = account
                .balance
                .checked_mul(account.monthly_rate)
                .map(round_currency)
                .ok_or(MoneyError::Overflow)?;
            account.balance = account
                .balance
                .checked_add(interest)
                .ok_or(MoneyError::Overflow)?;
            total_interest = total_interest
                .checked_add(interest)
                .ok_or(MoneyError::Overflow)?;

            let paid = account.minimum.min(account.balance);
            account.balance -= paid;
            pool += account.minimum - paid;
        }

        for account in accounts.iter_mut().filter(|a| a.closed_at.is_none()) {
            if pool <= Decimal::ZERO {
                break;
            }
            let paid = pool.min(account.balance);
            account.balance -= paid;
            pool -= paid;
        }

        for account in accounts.iter_mut().filter(|a| a.closed_at.is_none()) {
            if account.balance <= Decimal::ZERO {
                account.balance = Decimal::ZERO;
                account.closed_at = Some(month);
            }
        }

        timeline.push(BalanceRow {
            month,
            balances: accounts
                .iter()
                .map(|a| DebtBalance {
                    debt_id: debts[a.index].id,
                    balance: Money::new(a.balance, currency),
                })
                .collect(),
        });
    }

    Ok(build_plan(debts, strategy, &accounts, total_interest, timeline, currency))
}

fn build_plan(
    debts: &[Debt],
    strategy: PayoffStrategy,
    accounts: &[Account],
    total_interest: Decimal,
    timeline: Vec<BalanceRow>,
    currency: Currency,
) -> PayoffPlan {
    let mut schedule: Vec<PayoffEntry> = accounts
        .iter()
        .filter_map(|a| {
            a.closed_at.map(|month| PayoffEntry {
                debt_id: debts[a.index].id,
                name: debts[a.index].name.clone(),
                month,
            })
        })
        .collect();
    // Stable sort keeps priority order within a month
    schedule.sort_by_key(|entry| entry.month);

    let unpaid: Vec<DebtId> = accounts
        .iter()
        .filter(|a| a.closed_at.is_none())
        .map(|a| debts[a.index].id)
        .collect();

    for id in &unpaid {
        warn!(debt_id = %id, ?strategy, "Debt not paid off within the simulation horizon");
    }

    let months_to_debt_free = if unpaid.is_empty() {
        Some(schedule.iter().map(|e| e.month).max().unwrap_or(0))
    } else {
        None
    };

    debug!(
        ?strategy,
        months = timeline.len(),
        paid = schedule.len(),
        unpaid = unpaid.len(),
        "Simulated payoff plan"
    );

    PayoffPlan {
        strategy,
        priority: accounts.iter().map(|a| debts[a.index].id).collect(),
        schedule,
        unpaid,
        months_to_debt_free,
        total_interest: Money::new(total_interest, currency),
        timeline,
    }
}
