use std::collections::HashSet;

use juxing_site::router::{
    parse_fragment, AddressBar, MemoryAddress, RouteEntry, RouteName, RouteTable, Router,
    RouterError, ViewHandle, ROUTES,
};

const PATHS: [(&str, RouteName); 4] = [
    ("/", RouteName::Home),
    ("/intellectual", RouteName::Intellectual),
    ("/ia", RouteName::Ia),
    ("/zyzk001", RouteName::Zyzk001),
];

#[test]
fn declared_paths_resolve_to_distinct_views() {
    let table = RouteTable::new();
    let views: HashSet<ViewHandle> = PATHS
        .iter()
        .map(|(path, _)| table.resolve(path).unwrap())
        .collect();
    assert_eq!(views.len(), 4);

    assert_eq!(table.resolve("/"), Ok(ViewHandle::HOME));
    assert_eq!(table.resolve("/intellectual"), Ok(ViewHandle::INTELLECTUAL));
    assert_eq!(table.resolve("/ia"), Ok(ViewHandle::IA));
    assert_eq!(table.resolve("/zyzk001"), Ok(ViewHandle::ZYZK001));
}

#[test]
fn navigate_matches_resolve_for_every_name() {
    let table = RouteTable::new();
    let router = Router::new(&table, MemoryAddress::new());

    for (path, name) in PATHS {
        let view = router.navigate(name).unwrap();
        assert_eq!(Some(view), router.current());
        assert_eq!(table.resolve(path), Ok(view));
        assert_eq!(router.current_name(), Some(name));
    }
}

#[test]
fn fragment_round_trip_reproduces_view() {
    let table = RouteTable::new();

    for (_, name) in PATHS {
        let router = Router::new(&table, MemoryAddress::with_fragment("#/ia"));
        let view = router.navigate(name).unwrap();

        let fragment = router.current_fragment();
        assert_eq!(router.resolve(&parse_fragment(&fragment)), Ok(view));

        // "Recargar": un router nuevo sobre el mismo fragmento
        let reloaded = Router::new(&table, MemoryAddress::with_fragment(&fragment));
        assert_eq!(reloaded.sync_from_address(), Ok(view));
    }
}

#[test]
fn unknown_paths_fail_without_mutation() {
    let table = RouteTable::new();
    let address = MemoryAddress::new();
    let router = Router::new(&table, address.clone());
    router.navigate(RouteName::Intellectual).unwrap();
    let history_before = address.history_len();

    for path in ["/missing", "/ia/", "/IA", "ia", "", "/zyzk002", "//"] {
        let err = router.navigate_path(path).unwrap_err();
        assert_eq!(err, RouterError::RouteNotFound { path: path.to_string() });
        assert_eq!(router.current(), Some(ViewHandle::INTELLECTUAL));
    }
    assert_eq!(address.history_len(), history_before);
}

#[test]
fn navigate_home_twice_is_idempotent() {
    let table = RouteTable::new();
    let address = MemoryAddress::with_fragment("#/ia");
    let router = Router::new(&table, address.clone());

    router.navigate(RouteName::Home).unwrap();
    let once = (router.current(), address.read_fragment(), address.history_len());
    router.navigate(RouteName::Home).unwrap();
    let twice = (router.current(), address.read_fragment(), address.history_len());

    assert_eq!(once, twice);
    assert_eq!(twice.1, "#/");
}

#[test]
fn repeated_construction_yields_same_four_entries() {
    let tables: Vec<RouteTable> = (0..5).map(|_| RouteTable::new()).collect();
    for table in &tables {
        assert_eq!(table.len(), 4);
        assert_eq!(table.entries(), &ROUTES[..]);
        let paths: HashSet<_> = table.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), 4);
    }
    assert!(std::ptr::eq(RouteTable::shared(), RouteTable::shared()));
    assert_eq!(RouteTable::shared(), &tables[0]);
}

#[test]
fn custom_table_with_duplicates_is_rejected() {
    let mut entries = ROUTES.to_vec();
    entries.push(RouteEntry::new("/ia", RouteName::Ia, ViewHandle::IA));
    assert!(matches!(
        RouteTable::with_entries(&entries),
        Err(RouterError::DuplicatePath { .. })
    ));
}

#[test]
fn unknown_symbolic_name_is_reported() {
    let err = "contact".parse::<RouteName>().unwrap_err();
    assert_eq!(err.to_string(), "unknown route name: contact");
}
