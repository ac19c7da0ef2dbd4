//! End-to-end seating flow against the in-memory database.
//!
//! Walks the full walk-in lifecycle (waiting list → party → assignment →
//! completion → release) through the engine and repositories.

use reef_host::db::DbService;
use reef_host::db::models::{
    AssignmentStatus, DiningTableCreate, PartyCreate, PartyStatus, RestaurantCreate, ServerCreate,
    TableAssignmentCreate, TableAssignmentFilter, TableStatus, WaitingEntryCreate, WaitingStatus,
};
use reef_host::db::repository::{
    DiningTableRepository, PartyRepository, RestaurantRepository, ServerRepository,
    WaitingListRepository,
};
use reef_host::seating::{AssignmentEngine, SeatingError};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn seed_restaurant(db: &Surreal<Db>) -> RecordId {
    RestaurantRepository::new(db.clone())
        .create(RestaurantCreate {
            name: "Reef".to_string(),
            address: "1 Harbour St".to_string(),
            phone: "555-0100".to_string(),
            opening_time: "11:00:00".to_string(),
            closing_time: "23:00:00".to_string(),
            max_capacity: 60,
        })
        .await
        .unwrap()
        .id
        .unwrap()
}

#[tokio::test]
async fn walk_in_lifecycle() {
    let db = DbService::memory().await.unwrap().db;
    let restaurant = seed_restaurant(&db).await;
    let engine = AssignmentEngine::new(db.clone());

    let tables = DiningTableRepository::new(db.clone());
    let parties = PartyRepository::new(db.clone());

    let t1 = tables
        .create(DiningTableCreate {
            table_number: "T1".to_string(),
            capacity: 4,
            location: "window".to_string(),
            is_active: true,
            status: TableStatus::Available,
            restaurant: restaurant.clone(),
            sections: vec![],
        })
        .await
        .unwrap()
        .id
        .unwrap();

    let p1 = parties
        .create(PartyCreate {
            name: "Smith Party".to_string(),
            size: 4,
            phone: None,
            email: None,
            status: PartyStatus::Waiting,
            arrival_time: None,
        })
        .await
        .unwrap()
        .id
        .unwrap();

    let s1 = ServerRepository::new(db.clone())
        .create(ServerCreate {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            employee_id: "EMP-1".to_string(),
            is_active: true,
            shift_start: None,
            shift_end: None,
            restaurant: restaurant.clone(),
        })
        .await
        .unwrap()
        .id
        .unwrap();

    // Seat the party
    let assignment = engine
        .create_table_assignment(TableAssignmentCreate {
            table_id: t1.clone(),
            party_id: p1.clone(),
            server_id: s1.clone(),
            notes: Some("window please".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Active);
    assert_eq!(
        tables.find(&t1).await.unwrap().unwrap().status,
        TableStatus::Occupied
    );
    assert_eq!(
        parties.find(&p1).await.unwrap().unwrap().status,
        PartyStatus::Seated
    );

    // Repeating the exact same call must fail: the table is no longer AVAILABLE
    let err = engine
        .create_table_assignment(TableAssignmentCreate {
            table_id: t1.clone(),
            party_id: p1.clone(),
            server_id: s1.clone(),
            notes: None,
        })
        .await
        .unwrap_err();
    match err {
        SeatingError::InvalidState(msg) => {
            assert_eq!(msg, "Table is not available for assignment")
        }
        other => panic!("expected InvalidState, got {other:?}"),
    }
    assert_eq!(
        engine
            .list_table_assignments(TableAssignmentFilter::default())
            .await
            .unwrap()
            .len(),
        1
    );

    // Complete: party leaves, table needs cleaning
    let id = assignment.id.unwrap().to_string();
    let completed = engine
        .complete_table_assignment(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, AssignmentStatus::Completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(
        tables.find(&t1).await.unwrap().unwrap().status,
        TableStatus::Cleaning
    );
    assert_eq!(
        parties.find(&p1).await.unwrap().unwrap().status,
        PartyStatus::Finished
    );

    // Delete the (already COMPLETED) assignment: table is released anyway
    assert!(engine.delete_table_assignment(&id).await.unwrap());
    assert_eq!(
        tables.find(&t1).await.unwrap().unwrap().status,
        TableStatus::Available
    );
}

#[tokio::test]
async fn waiting_list_is_fifo() {
    let db = DbService::memory().await.unwrap().db;
    let restaurant = seed_restaurant(&db).await;
    let repo = WaitingListRepository::new(db.clone());

    let first = repo
        .create(WaitingEntryCreate {
            customer_name: "First".to_string(),
            customer_phone: "555-1".to_string(),
            party_size: 2,
            estimated_wait_time: None,
            notes: None,
            restaurant: restaurant.clone(),
        })
        .await
        .unwrap();

    // Ensure a strictly later request_time for the second entry
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    repo.create(WaitingEntryCreate {
        customer_name: "Second".to_string(),
        customer_phone: "555-2".to_string(),
        party_size: 3,
        estimated_wait_time: None,
        notes: None,
        restaurant: restaurant.clone(),
    })
    .await
    .unwrap();

    let next = repo
        .find_next(restaurant.clone())
        .await
        .unwrap()
        .expect("one entry should be waiting");
    assert_eq!(next.customer_name, "First");

    // Seating the head of the queue moves `next` to the second entry
    repo.set_status(first.id.as_ref().unwrap(), WaitingStatus::Seated)
        .await
        .unwrap();
    let next = repo
        .find_next(restaurant.clone())
        .await
        .unwrap()
        .expect("second entry should be waiting");
    assert_eq!(next.customer_name, "Second");

    // Listing keeps FIFO order regardless of status filters
    let all = repo.find_filtered(Some(restaurant), None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].customer_name, "First");
    assert_eq!(all[1].customer_name, "Second");
}

#[tokio::test]
async fn availability_respects_capacity_and_active_flag() {
    let db = DbService::memory().await.unwrap().db;
    let restaurant = seed_restaurant(&db).await;
    let tables = DiningTableRepository::new(db.clone());

    for (number, capacity, is_active, status) in [
        ("T1", 2, true, TableStatus::Available),
        ("T2", 6, true, TableStatus::Available),
        ("T3", 8, false, TableStatus::Available),
        ("T4", 8, true, TableStatus::Occupied),
    ] {
        tables
            .create(DiningTableCreate {
                table_number: number.to_string(),
                capacity,
                location: "main floor".to_string(),
                is_active,
                status,
                restaurant: restaurant.clone(),
                sections: vec![],
            })
            .await
            .unwrap();
    }

    // Only T2 is active, available, and large enough for a party of 4
    let available = tables.find_available(restaurant.clone(), 4).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].table_number, "T2");

    assert_eq!(tables.count_by_restaurant(restaurant.clone()).await.unwrap(), 4);
    assert_eq!(tables.count_held(restaurant).await.unwrap(), 1);
}
