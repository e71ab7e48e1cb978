//! Write → read invalidation contract
//!
//! A successful write must re-issue the reads listed in [`refetch_after`] so
//! every view reflects the new backend state. The table is the whole
//! contract; a view subscribes by reading its query's generation counter
//! inside its resource closure, and every bump restarts the read.

use dioxus::prelude::*;

/// Read operations with a standing subscription in the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadQuery {
    Accounts,
    Transactions,
}

/// Write operations of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    CreateAccount,
    RecordTransaction,
    DeleteAccount,
}

/// Reads to re-issue after each successful write. No shipped flow deletes an
/// account, so that write invalidates nothing.
pub fn refetch_after(write: WriteOp) -> &'static [ReadQuery] {
    match write {
        WriteOp::CreateAccount => &[ReadQuery::Accounts],
        WriteOp::RecordTransaction => &[ReadQuery::Transactions, ReadQuery::Accounts],
        WriteOp::DeleteAccount => &[],
    }
}

static ACCOUNTS_GENERATION: GlobalSignal<u32> = Signal::global(|| 0);
static TRANSACTIONS_GENERATION: GlobalSignal<u32> = Signal::global(|| 0);

fn generation_signal(query: ReadQuery) -> &'static GlobalSignal<u32> {
    match query {
        ReadQuery::Accounts => &ACCOUNTS_GENERATION,
        ReadQuery::Transactions => &TRANSACTIONS_GENERATION,
    }
}

/// Current generation of a query. Reading it inside a resource closure
/// subscribes the resource to future bumps.
pub fn generation(query: ReadQuery) -> u32 {
    *generation_signal(query).read()
}

/// Re-issues one read; used by the refresh buttons.
pub fn refresh(query: ReadQuery) {
    *generation_signal(query).write() += 1;
}

/// Re-issues every read bound to a write that just succeeded. The refetches
/// run in the background; callers report the write's outcome without waiting
/// for them.
pub fn invalidate(write: WriteOp) {
    for query in refetch_after(write) {
        tracing::debug!(?write, ?query, "refetching after write");
        refresh(*query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_refetches_accounts() {
        assert_eq!(
            refetch_after(WriteOp::CreateAccount),
            &[ReadQuery::Accounts]
        );
    }

    #[test]
    fn test_record_transaction_refetches_both_lists() {
        assert_eq!(
            refetch_after(WriteOp::RecordTransaction),
            &[ReadQuery::Transactions, ReadQuery::Accounts]
        );
    }

    #[test]
    fn test_delete_account_refetches_nothing() {
        assert!(refetch_after(WriteOp::DeleteAccount).is_empty());
    }
}
