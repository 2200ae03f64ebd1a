//! Handlers for the compilation unit and its header.

use super::super::indent_level::IndentLevel;
use super::{Candidate, CheckResult, Frame, IndentHandler};

/// Root of the handler tree. Everything at the top of a file belongs at
/// column 0.
pub(crate) struct Primordial;

impl IndentHandler for Primordial {
    fn suggested_child_level<'a>(&self, _frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        IndentLevel::new(0)
    }

    fn check_indentation(&self, _frame: &Frame<'_, '_>) -> CheckResult {
        Ok(())
    }
}

pub(crate) struct PackageDef;

impl IndentHandler for PackageDef {
    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        check_header_declaration(frame);
        Ok(())
    }
}

pub(crate) struct Import;

impl IndentHandler for Import {
    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        check_header_declaration(frame);
        Ok(())
    }
}

/// The declaration must start at its level; wrapped lines follow the line
/// wrapping indentation.
fn check_header_declaration(frame: &Frame<'_, '_>) {
    let node = frame.node();
    frame.check_token(node, "", frame.level(), true);
    frame.check_wrapping(node, node.children());
}
