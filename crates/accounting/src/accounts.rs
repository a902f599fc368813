//! Suggested chart of accounts for the entry form.

use restobooks_ledger::Category;

/// Account labels offered for a category at the input boundary.
///
/// The engine accepts any label; these lists are what the entry form shows,
/// sized for a small restaurant's books.
pub fn suggested_accounts(category: Category) -> &'static [&'static str] {
    match category {
        Category::Income => &[
            "Food Sales",
            "Beverage Sales",
            "Catering Sales",
            "Delivery Sales",
        ],
        Category::Expense => &[
            "Food Purchases",
            "Beverage Purchases",
            "Salaries/Wages",
            "Rent",
            "Utilities",
            "Marketing",
            "Depreciation",
        ],
        Category::Asset => &["Cash", "Accounts Receivable", "Inventory"],
        Category::Liability => &["Accounts Payable", "Loans", "Accrued Expenses"],
    }
}
