mod transactions;
mod virtual_accounts;
mod webhooks;
