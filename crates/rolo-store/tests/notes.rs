use rolo_core::Note;
use rolo_store::NoteList;

fn sample_list() -> NoteList {
    let mut notes = NoteList::new();
    notes.add(Note::new("buy milk", vec!["errands".to_string()]));
    notes.add(Note::new(
        "call the bank",
        vec!["money".to_string(), "errands".to_string()],
    ));
    notes.add(Note::new("untagged thought", Vec::new()));
    notes
}

#[test]
fn add_keeps_insertion_order() {
    let notes = sample_list();
    let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["buy milk", "call the bank", "untagged thought"]);
}

#[test]
fn find_by_tag_is_exact_and_linear() {
    let notes = sample_list();
    assert_eq!(notes.find_by_tag("errands").len(), 2);
    assert_eq!(notes.find_by_tag("money").len(), 1);
    assert!(notes.find_by_tag("errand").is_empty());
}

#[test]
fn find_by_tag_sorted_orders_by_tag_lists() {
    let notes = sample_list();
    let found = notes.find_by_tag_sorted("errands");
    assert_eq!(found.len(), 2);
    assert!(found[0].tags <= found[1].tags);
}

#[test]
fn edit_content_updates_every_tagged_note() {
    let mut notes = sample_list();
    let updated = notes.edit_content("errands", "done");
    assert_eq!(updated, 2);
    assert_eq!(notes.notes()[0].content, "done");
    assert_eq!(notes.notes()[1].content, "done");
    assert_eq!(notes.notes()[2].content, "untagged thought");

    assert_eq!(notes.edit_content("nope", "x"), 0);
}

#[test]
fn remove_by_tag_reports_removed_count() {
    let mut notes = sample_list();
    assert_eq!(notes.remove_by_tag("missing"), 0);
    assert_eq!(notes.len(), 3);
    assert_eq!(notes.remove_by_tag("errands"), 2);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.notes()[0].content, "untagged thought");
}

#[test]
fn duplicate_notes_are_allowed() {
    let mut notes = NoteList::new();
    let note = Note::new("same", vec!["t".to_string()]);
    notes.add(note.clone());
    notes.add(note);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes.find_by_tag("t").len(), 2);
}
