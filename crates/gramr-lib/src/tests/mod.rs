//! Whole-grammar tests: the algebra used the way a consumer uses it.

mod lisp_tests;
