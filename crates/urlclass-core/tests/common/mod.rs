pub mod forest_fixture;
