//! Account display formatting

use crate::models::Account;

/// Format accounts as a two-column table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {}\n",
        "Name",
        "Type",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}\n",
        "",
        "",
        name_width = name_width
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            account.name,
            account.account_type,
            name_width = name_width
        ));
    }

    output.push_str(&format!("\n{} account(s)\n", accounts.len()));
    output
}
