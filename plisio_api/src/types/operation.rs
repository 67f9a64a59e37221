//! Operation-level enumerations: transaction kinds, statuses, withdraw kinds and fee plans.

code_enum! {
    /// Kind of an operation as reported by `/operations`.
    TransactionType {
        /// Incoming payment.
        CashIn => ("cash_in", "Cash in"),
        /// Single withdrawal.
        CashOut => ("cash_out", "Cash out"),
        /// Withdrawal to several addresses at once.
        MassCashOut => ("mass_cash_out", "Mass cash out"),
        /// Invoice payment.
        Invoice => ("invoice", "Invoice"),
    }
}

code_enum! {
    /// Lifecycle status of an operation.
    TransactionStatus {
        New => ("new", "New"),
        Pending => ("pending", "Pending"),
        /// Awaiting an internal transfer between Plisio wallets.
        PendingInternal => ("pending internal", "Pending internal"),
        Expired => ("expired", "Expired"),
        Completed => ("completed", "Completed"),
        /// The amount received differs from the amount invoiced.
        Mismatch => ("mismatch", "Mismatch"),
        Error => ("error", "Error"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

code_enum! {
    /// Withdrawal flavour accepted by `/operations/withdraw`.
    WithdrawType {
        CashOut => ("cash_out", "Cash out"),
        MassCashOut => ("mass_cash_out", "Mass cash out"),
    }
}

code_enum! {
    /// Network fee plan for outgoing transactions.
    FeePlan {
        Economy => ("economy", "Economy"),
        Normal => ("normal", "Normal"),
        Priority => ("priority", "Priority"),
        /// Caller-supplied fee, configured in the Plisio dashboard.
        Custom => ("custom", "Custom"),
    }
}

code_enum! {
    /// HTTP verbs the clients can issue.
    HttpMethod {
        Get => ("GET", "GET"),
        Post => ("POST", "POST"),
        Put => ("PUT", "PUT"),
        Delete => ("DELETE", "DELETE"),
    }
}

impl HttpMethod {
    /// Reads never carry a body; their parameters always travel in the query string.
    pub fn is_read(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }

    pub(crate) fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}
