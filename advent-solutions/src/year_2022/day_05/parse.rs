//! Input parsing: crate diagram, blank line, move list

use super::crane::Move;
use super::stacks::{Crate, Stack, StackStore};
use anyhow::{anyhow, bail, ensure, Context};
use itertools::Itertools;

/// Number of stacks drawn in a diagram row of `width` characters
///
/// Every column takes a 3-character field plus a 1-character separator, and
/// the last separator is omitted: `width = 4 * n - 1`, so `n = (width + 1) / 4`.
pub fn column_count(width: usize) -> usize {
    (width + 1) / 4
}

/// Parse the whole puzzle input into the initial stacks and the move list
pub fn procedure(input: &str) -> anyhow::Result<(StackStore, Vec<Move>)> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    let diagram: Vec<(usize, &str)> = lines
        .by_ref()
        .take_while(|(_, line)| !line.trim().is_empty())
        .collect();
    let ((footer_no, footer), rows) = diagram
        .split_last()
        .ok_or_else(|| anyhow!("missing crate diagram"))?;

    let store = stacks(rows, footer)?;
    check_footer(footer, store.len()).with_context(|| format!("line {}", footer_no))?;

    let moves = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            step(line, store.len()).with_context(|| format!("line {}", line_no))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok((store, moves))
}

/// Build stacks from diagram rows, top row first
///
/// The width is that of the widest line, footer included. A trimmed footer
/// lost the blank after its last label, so one column is added back.
fn stacks(rows: &[(usize, &str)], footer: &str) -> anyhow::Result<StackStore> {
    ensure!(!rows.is_empty(), "crate diagram has no crate rows");

    let footer_width = footer.trim_end().len() + 1;
    let width = rows
        .iter()
        .map(|(_, row)| row.len())
        .chain([footer_width])
        .max()
        .unwrap_or(0);
    let count = column_count(width);
    ensure!(count > 0, "crate diagram is too narrow");

    let mut stacks = vec![Stack::new(); count];
    // Bottom row first, so the lowest drawn crate ends up at the bottom
    for (line_no, row) in rows.iter().rev() {
        let labels = row_labels(row, count).with_context(|| format!("line {}", line_no))?;
        for (stack, label) in stacks.iter_mut().zip(labels) {
            if let Some(label) = label {
                stack.push(Crate(label));
            }
        }
    }
    Ok(StackStore::new(stacks))
}

/// Read one diagram row as `count` optional labels
///
/// Rows may be shorter than the full width (trailing blanks trimmed), never
/// longer.
fn row_labels(row: &str, count: usize) -> anyhow::Result<Vec<Option<char>>> {
    ensure!(row.is_ascii(), "diagram rows must be ASCII");
    ensure!(
        row.len() <= 4 * count,
        "row is {} characters wide, expected at most {}",
        row.len(),
        4 * count - 1
    );

    let bytes = row.as_bytes();
    (0..count)
        .map(|column| {
            let start = 4 * column;
            let field = bytes.get(start..(start + 3).min(bytes.len())).unwrap_or(&[]);
            if let Some(&separator) = bytes.get(start + 3) {
                ensure!(
                    separator == b' ',
                    "expected a space after column {}, found {:?}",
                    column + 1,
                    separator as char
                );
            }
            match field {
                [b'[', label, b']'] if label.is_ascii_graphic() => Ok(Some(*label as char)),
                blank if blank.iter().all(|&b| b == b' ') => Ok(None),
                other => bail!(
                    "column {}: expected \"[X]\" or blanks, found {:?}",
                    column + 1,
                    String::from_utf8_lossy(other)
                ),
            }
        })
        .collect()
}

/// The footer must number the stacks 1..=count
fn check_footer(footer: &str, count: usize) -> anyhow::Result<()> {
    let numbers = footer
        .split_whitespace()
        .map(|label| {
            label
                .parse::<usize>()
                .with_context(|| format!("footer label {:?} is not a number", label))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(
        numbers.iter().copied().eq(1..=count),
        "footer numbers {:?} do not match {} stack(s)",
        numbers,
        count
    );
    Ok(())
}

/// Parse `move <quantity> from <source> to <destination>`
fn step(line: &str, count: usize) -> anyhow::Result<Move> {
    let Some(("move", quantity, "from", from, "to", to)) = line.split_whitespace().collect_tuple()
    else {
        bail!("expected \"move <n> from <a> to <b>\", found {:?}", line);
    };

    let number = |field: &str, name: &str| {
        field
            .parse::<usize>()
            .with_context(|| format!("invalid {} {:?}", name, field))
    };
    let parsed = Move {
        quantity: number(quantity, "quantity")?,
        from: number(from, "source")?,
        to: number(to, "destination")?,
    };

    ensure!(parsed.quantity >= 1, "quantity must be at least 1");
    for index in [parsed.from, parsed.to] {
        ensure!(
            (1..=count).contains(&index),
            "stack {} does not exist, there are {}",
            index,
            count
        );
    }
    Ok(parsed)
}
