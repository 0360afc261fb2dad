//! Tests for row assignment and the committed float/clear flow.

use super::*;

#[test]
/// # Panics
/// Panics if three 40px items in 100px do not wrap after the second.
fn wrap_boundary() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-wrap", "wrap")]);
    for _ in 0..3 {
        child(&mut host, node, (40, 10), &[], &[]);
    }
    let (flex, report) = run(&mut host, node)?;
    assert_eq!(rows_of(&flex), vec![0, 0, 1]);
    assert_eq!(report.lines.len(), 2);
    let bases: Vec<i32> = report.lines.iter().map(|line| line.base_total).collect();
    assert_eq!(bases, vec![80, 40]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a row that exactly fits is broken early.
fn exact_fit_stays_on_one_row() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-flow", "row wrap")]);
    for width in [40, 60] {
        child(&mut host, node, (width, 10), &[], &[]);
    }
    let (flex, _) = run(&mut host, node)?;
    assert_eq!(rows_of(&flex), vec![0, 0]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if an oversized item closes an empty row or shares a row it does not fit in.
fn oversized_items_never_leave_empty_rows() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-wrap", "wrap")]);
    for width in [150, 20, 150, 20] {
        child(&mut host, node, (width, 10), &[("min-width", "0px")], &[("data-flex-shrink", "0")]);
    }
    let (flex, report) = run(&mut host, node)?;
    assert_eq!(rows_of(&flex), vec![0, 1, 2, 3]);
    assert!(report.lines.iter().all(|line| !line.items.is_empty()));
    Ok(())
}

#[test]
/// # Panics
/// Panics if a non-wrapping container puts overflowing items on more than one row.
fn nowrap_keeps_a_single_row() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[]);
    for _ in 0..4 {
        child(&mut host, node, (40, 10), &[], &[("data-flex-shrink", "0")]);
    }
    let (flex, report) = run(&mut host, node)?;
    assert_eq!(rows_of(&flex), vec![0, 0, 0, 0]);
    assert_eq!(report.lines.first().map(|line| line.space_left), Some(-60));
    Ok(())
}

#[test]
/// # Panics
/// Panics if row items are not floated or later rows do not clear.
fn rows_commit_float_and_clear() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-wrap", "wrap")]);
    let items: Vec<NodeRef> = (0..3)
        .map(|_| child(&mut host, node, (40, 10), &[], &[]))
        .collect();
    run(&mut host, node)?;
    let floats: Vec<Option<&str>> = items
        .iter()
        .map(|item| host.inline_style(*item, "float"))
        .collect();
    assert_eq!(floats, vec![Some("left"); 3]);
    let clears: Vec<Option<&str>> = items
        .iter()
        .map(|item| host.inline_style(*item, "clear"))
        .collect();
    assert_eq!(clears, vec![None, None, Some("left")]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if `order` changes which row an item lands in.
fn order_does_not_reorder_rows() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-wrap", "wrap")]);
    child(&mut host, node, (60, 10), &[], &[("data-flex-order", "2")]);
    child(&mut host, node, (60, 10), &[], &[("data-flex-order", "1")]);
    let (flex, _) = run(&mut host, node)?;
    let orders: Vec<i32> = flex.items().iter().map(|item| item.config().order).collect();
    assert_eq!(orders, vec![2, 1]);
    assert_eq!(rows_of(&flex), vec![0, 1]);
    Ok(())
}
