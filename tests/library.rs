use std::io::Write;

use keyed_bst::library::{LoadError, LoadOptions, MovieLibrary};

fn expect(library: &MovieLibrary, listing: &str) {
    assert_eq!(library.to_string(), listing);
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const RECORDS: &str = "Memento\t11/10/2000\t113
Melvin and Howard\t19/09/1980\t95
Melvin and Howard\t21/03/2007\t112
Mellow Mud\t21/09/2016\t92
Melody\t21/03/2007\t113
";

#[test]
fn open_builds_library_from_file() {
    init_logger();

    let path = std::env::temp_dir().join(format!("keyed_bst_movies_{}.tsv", std::process::id()));
    std::fs::File::create(&path)
        .and_then(|mut file| file.write_all(RECORDS.as_bytes()))
        .unwrap();

    let result = MovieLibrary::open(&path, &LoadOptions::default());
    std::fs::remove_file(&path).unwrap();
    let (library, report) = result.unwrap();

    assert_eq!(report.read, 5);
    assert_eq!(report.added, 4);
    assert_eq!(report.duplicates(), 1);
    assert_eq!(library.size(), 4);
    assert_eq!(
        library.titles().collect::<Vec<_>>(),
        ["Mellow Mud", "Melody", "Melvin and Howard", "Memento"]
    );
}

#[test]
fn adding_and_removing_in_turn() {
    init_logger();
    let mut library = MovieLibrary::new();

    library.add("B", "b", 1);
    library.add("A", "a", 1);
    expect(&library, "A B");
    assert!(library.remove("A").is_some());
    library.add("C", "c", 1);
    assert!(library.remove("C").is_some());
    library.add("F", "f", 1);
    assert_eq!(library.remove("B").map(|m| m.key().clone()), Some("B".to_string()));
    expect(&library, "F");

    library.add("C", "c", 1);
    library.add("D", "d", 1);
    assert!(!library.add("C", "c", 1));
    library.add("E", "e", 1);
    assert!(library.remove("B").is_none());
    for title in ["D", "C", "E"] {
        assert!(library.remove(title).is_some());
    }
    expect(&library, "F");

    for title in ["L", "H", "I", "G"] {
        library.add(title, title.to_lowercase(), 1);
    }
    expect(&library, "F G H I L");
    for title in ["L", "H", "I", "G"] {
        assert!(library.remove(title).is_some());
    }
    expect(&library, "F");
    assert_eq!(library.height(), 0);

    assert!(library.remove("F").is_some());
    assert_eq!(library.size(), 0);
    assert_eq!(library.height(), -1);
}

#[test]
fn missing_file_is_an_io_error() {
    init_logger();

    let err = MovieLibrary::open("/no/such/movies.tsv", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
