pub mod loan_book;
