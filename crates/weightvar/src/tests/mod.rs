//! Unit and behaviour tests for weightvar.
