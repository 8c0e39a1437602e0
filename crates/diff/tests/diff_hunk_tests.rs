use line_diff::{align, group_hunks, split_lines, DiffHunk, DiffHunkRange, DiffHunkStatus, Edit};

#[test]
fn test_diff_hunk_from_window() {
    let edits = [
        Edit::Keep("a"),
        Edit::Keep("b"),
        Edit::Insert("c"),
        Edit::Insert("d"),
        Edit::Keep("e"),
    ];
    let hunk = DiffHunk::from_window(&edits, 1..5);

    assert_eq!(hunk.status, DiffHunkStatus::Added);
    assert_eq!(hunk.old_range, DiffHunkRange::new(2, 2));
    assert_eq!(hunk.new_range, DiffHunkRange::new(2, 4));
    assert_eq!(hunk.lines(&edits).len(), 4);
    assert_eq!(hunk.added_lines(&edits), 2);
    assert_eq!(hunk.deleted_lines(&edits), 0);
    assert_eq!(hunk.context_lines(&edits), 2);
}

#[test]
fn test_diff_hunk_deleted() {
    let edits = [Edit::Delete("a"), Edit::Delete("b"), Edit::Keep("c")];
    let hunk = DiffHunk::from_window(&edits, 0..3);

    assert_eq!(hunk.status, DiffHunkStatus::Deleted);
    assert_eq!(hunk.header(), "@@ -1,3 +1,1 @@");
}

#[test]
fn test_start_lines_follow_preceding_entries() {
    // Inserts only advance the new side, deletes only the old side
    let edits = [
        Edit::Insert("x"),
        Edit::Insert("y"),
        Edit::Delete("z"),
        Edit::Keep("k"),
        Edit::Delete("m"),
    ];
    let hunk = DiffHunk::from_window(&edits, 4..5);

    assert_eq!(hunk.old_range.start, 3);
    assert_eq!(hunk.new_range.start, 4);
    assert_eq!(hunk.old_range.count, 1);
    assert!(hunk.new_range.is_empty());
}

#[test]
fn test_status_display() {
    assert_eq!(DiffHunkStatus::Added.to_string(), "Added");
    assert_eq!(DiffHunkStatus::Deleted.to_string(), "Deleted");
    assert_eq!(DiffHunkStatus::Modified.to_string(), "Modified");
}

#[test]
fn test_hunks_are_ordered_and_disjoint() {
    let old = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n12\n13\n14\n15\n";
    let new = "1\nx\n3\n4\n5\n6\n7\ny\n9\n10\n11\n12\n13\n14\nz\n";
    let (old, new) = (split_lines(old), split_lines(new));
    let edits = align(&old, &new);

    for context in 0..4 {
        let hunks = group_hunks(&edits, context);
        for pair in hunks.windows(2) {
            assert!(pair[0].window.end <= pair[1].window.start);
            assert!(pair[0].old_range.end() <= pair[1].old_range.start);
            assert!(pair[0].new_range.end() <= pair[1].new_range.start);
        }
        let changes: usize = hunks
            .iter()
            .map(|h| h.added_lines(&edits) + h.deleted_lines(&edits))
            .sum();
        assert_eq!(changes, 6);
    }
}
