//! Tests for margin-based justification.

use super::*;

fn justified(justify: &str, count: usize) -> Result<(MemoryHost, Vec<NodeRef>), LayoutError> {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "100px")], &[("data-flex-justify", justify)]);
    let items: Vec<NodeRef> = (0..count)
        .map(|_| child(&mut host, node, (20, 10), &[], &[]))
        .collect();
    run(&mut host, node)?;
    Ok((host, items))
}

fn margins(host: &MemoryHost, items: &[NodeRef], side: Side) -> Vec<Option<String>> {
    items
        .iter()
        .map(|item| host.inline_style(*item, side.margin_property()).map(str::to_owned))
        .collect()
}

#[test]
/// # Panics
/// Panics if space-between does not put equal gaps after every item but the last.
fn space_between_gaps() -> TestResult {
    let (host, items) = justified("space-between", 3)?;
    assert_eq!(
        margins(&host, &items, Side::Right),
        vec![Some("20px".to_owned()), Some("20px".to_owned()), None]
    );
    assert_eq!(margins(&host, &items, Side::Left), vec![None, None, None]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a single item under space-between receives a gap.
fn space_between_single_item_is_untouched() -> TestResult {
    let (host, items) = justified("space-between", 1)?;
    assert_eq!(margins(&host, &items, Side::Right), vec![None]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if flex-end does not push the first item by all the free space.
fn flex_end_offsets_first_item() -> TestResult {
    let (host, items) = justified("flex-end", 3)?;
    assert_eq!(
        margins(&host, &items, Side::Left),
        vec![Some("40px".to_owned()), None, None]
    );
    Ok(())
}

#[test]
/// # Panics
/// Panics if center does not push the first item by half the free space.
fn center_offsets_first_item_by_half() -> TestResult {
    let (host, items) = justified("center", 3)?;
    assert_eq!(
        margins(&host, &items, Side::Left),
        vec![Some("20px".to_owned()), None, None]
    );
    Ok(())
}

#[test]
/// # Panics
/// Panics if space-around does not give every item equal margins on both sides.
fn space_around_wraps_each_item() -> TestResult {
    let (host, items) = justified("space-around", 3)?;
    let expected = vec![Some("6px".to_owned()); 3];
    assert_eq!(margins(&host, &items, Side::Left), expected);
    assert_eq!(margins(&host, &items, Side::Right), expected);
    Ok(())
}

#[test]
/// # Panics
/// Panics if an overflowing row is justified.
fn overflowing_rows_are_not_justified() -> TestResult {
    let mut host = MemoryHost::new();
    let node = container(&mut host, &[("width", "30px")], &[("data-flex-justify", "center")]);
    let items = [
        child(&mut host, node, (20, 10), &[], &[("data-flex-shrink", "0")]),
        child(&mut host, node, (20, 10), &[], &[("data-flex-shrink", "0")]),
    ];
    run(&mut host, node)?;
    assert_eq!(margins(&host, &items, Side::Left), vec![None, None]);
    Ok(())
}
