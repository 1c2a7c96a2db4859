//! First-run seed data, written when a collection file does not exist yet

use serde_json::json;

use crate::error::AppResult;
use crate::models::{
    Asset, BorrowingRecord, Category, Location, MaintenanceRecord, User, WorkUnit,
};

pub fn initial_work_units() -> AppResult<Vec<WorkUnit>> {
    Ok(serde_json::from_value(json!([
        { "id": "1", "name": "Rektorat" },
        { "id": "2", "name": "Magister Manajemen" },
        { "id": "3", "name": "Manajemen" },
        { "id": "4", "name": "Teknik Informatika" },
        { "id": "5", "name": "Sistem Informasi" },
        { "id": "6", "name": "Teknik Sipil" },
        { "id": "7", "name": "PGSD" },
        { "id": "8", "name": "Akuntansi" }
    ]))?)
}

pub fn initial_users() -> AppResult<Vec<User>> {
    Ok(serde_json::from_value(json!([
        { "id": "1", "name": "Admin Pusat", "username": "admin", "password": "admin",
          "role": "ADMIN", "studyProgram": "Manajemen", "position": "Kepala BAUK" },
        { "id": "2", "name": "Petugas IT", "username": "petugas", "password": "petugas",
          "role": "OFFICER", "studyProgram": "Teknik Informatika", "position": "Staf Sarpras" },
        { "id": "3", "name": "Dekan Teknik", "username": "pimpinan", "password": "pimpinan",
          "role": "LEADER", "studyProgram": "Teknik Sipil", "position": "Pimpinan Fakultas" },
        { "id": "4", "name": "Staff Akuntansi", "username": "user", "password": "user",
          "role": "UNIT_USER", "studyProgram": "Akuntansi", "position": "Staf Administrasi" }
    ]))?)
}

pub fn initial_locations() -> AppResult<Vec<Location>> {
    Ok(serde_json::from_value(json!([
        { "id": "1", "building": "Gedung A", "room": "Laboratorium 1" },
        { "id": "2", "building": "Gedung A", "room": "Laboratorium 2" },
        { "id": "3", "building": "Gedung B", "room": "Ruang Dosen" },
        { "id": "4", "building": "Gedung C", "room": "Ruang 301" }
    ]))?)
}

pub fn initial_categories() -> AppResult<Vec<Category>> {
    Ok(serde_json::from_value(json!([
        { "id": "1", "name": "Elektronik", "description": "Electronic equipment" },
        { "id": "2", "name": "Mebel", "description": "Office and classroom furniture" },
        { "id": "3", "name": "Alat Peraga", "description": "Teaching aids" }
    ]))?)
}

pub fn initial_assets() -> AppResult<Vec<Asset>> {
    Ok(serde_json::from_value(json!([
        {
            "id": "1",
            "code": "AST-001",
            "name": "Proyektor Epson EB-X400",
            "category": "Elektronik",
            "type": "Office Equipment",
            "location": { "building": "Gedung A", "room": "Laboratorium 1", "studyProgram": "Teknik Informatika" },
            "condition": "Good",
            "status": "Available",
            "purchaseDate": "2023-01-15",
            "price": 6500000
        },
        {
            "id": "2",
            "code": "AST-002",
            "name": "Laptop Dell Latitude 5420",
            "category": "Elektronik",
            "type": "Office Equipment",
            "location": { "building": "Gedung B", "room": "Ruang Dosen", "studyProgram": "Sistem Informasi" },
            "condition": "LightDamage",
            "status": "Available",
            "purchaseDate": "2022-05-20",
            "price": 15000000
        },
        {
            "id": "3",
            "code": "AST-003",
            "name": "Kursi Kuliah Informa",
            "category": "Mebel",
            "type": "Furniture",
            "location": { "building": "Gedung C", "room": "Ruang 301", "studyProgram": "Manajemen" },
            "condition": "Good",
            "status": "Borrowed",
            "purchaseDate": "2021-11-10",
            "price": 450000
        }
    ]))?)
}

pub fn initial_maintenance() -> AppResult<Vec<MaintenanceRecord>> {
    Ok(serde_json::from_value(json!([
        {
            "id": "m1",
            "assetId": "2",
            "assetName": "Laptop Dell Latitude 5420",
            "date": "2024-03-01",
            "description": "Internal cleaning and RAM upgrade",
            "type": "Routine",
            "cost": 1200000,
            "performedBy": "IT Support",
            "status": "Done"
        }
    ]))?)
}

pub fn initial_borrowing() -> AppResult<Vec<BorrowingRecord>> {
    Ok(serde_json::from_value(json!([
        {
            "id": "b1",
            "assetId": "3",
            "assetName": "Kursi Kuliah Informa",
            "borrowerName": "Budi Santoso",
            "borrowerUnit": "Manajemen",
            "borrowDate": "2024-03-10",
            "dueDate": "2024-03-15",
            "status": "Active",
            "notes": "Study program seminar"
        }
    ]))?)
}
