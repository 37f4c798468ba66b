//! rpncalc - a postfix (RPN) calculator and the containers underneath it
//!
//! # Overview
//!
//! rpncalc evaluates integer arithmetic written in postfix notation:
//! instead of `(1 - 2) * (3 + 4)`, you write `1 2 - 3 4 + *`. Operands
//! push onto a stack, operators pop two values and push the result, so
//! no parentheses or priority rules are needed.
//!
//! The stack is not std's. The crate carries its own small containers,
//! each usable on its own:
//!
//! - [`LinkedList`] - singly linked list that tracks both ends, with
//!   O(1) pushes at either end.
//! - [`Stack`] - LIFO capability, implemented by the list.
//! - [`ChainedSet`] - hash set with separate chaining over a fixed
//!   bucket table (never rehashes, never resizes).
//! - [`BinarySearchTree`] - unbalanced search tree over `Ord` elements.
//!
//! # Stack-Based Evaluation
//!
//! ```text
//! # Operands push themselves to the stack
//! 1 2              # Stack: [1, 2]
//!
//! # Operators pop two, push one (left operand popped last)
//! 1 2 -            # 1 - 2 -> Stack: [-1]
//!
//! # Expressions reduce to a single value
//! 1 2 - 3 4 + *    # (1 - 2) * (3 + 4) -> -7
//! ```
//!
//! # Example
//!
//! ```rust
//! use rpncalc::evaluate;
//!
//! assert_eq!(evaluate("1 2 - 3 4 + *").unwrap(), -7);
//! assert!(evaluate("5 0 /").is_err());
//! ```

pub mod eval;
pub mod lexer;
pub mod list;
pub mod set;
pub mod stack;
pub mod tree;

// Re-export commonly used items
pub use eval::{evaluate, EvalError};
pub use lexer::{LexError, Op, Token};
pub use list::{LinkedList, ListError};
pub use set::{CapacityError, ChainedSet};
pub use stack::{Stack, StackError};
pub use tree::BinarySearchTree;
