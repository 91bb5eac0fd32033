//! Test fixtures: pets, photo bytes and submission forms.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use petadopt_core::models::NewPet;

/// Minimal JPEG header bytes; content is never inspected by the server.
pub fn fake_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9]
}

pub fn new_pet(pet_type: &str, name: &str) -> NewPet {
    NewPet {
        pet_type: pet_type.to_string(),
        name: name.to_string(),
        breed: "mixed".to_string(),
        age: "adult".to_string(),
        size: "medium".to_string(),
        gender: "female".to_string(),
        description: "gentle and house-trained".to_string(),
        location: "Recife".to_string(),
    }
}

/// The eight text fields of a complete submission.
pub fn pet_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("type", "dog"),
        ("name", "Bolt"),
        ("breed", "beagle"),
        ("age", "puppy"),
        ("size", "small"),
        ("gender", "male"),
        ("description", "loves walks"),
        ("location", "Recife"),
    ]
}

pub fn photo_part(filename: &str, data: Vec<u8>) -> Part {
    Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type("image/jpeg")
}

/// A complete submission form, minus `skip_field` when given.
pub fn pet_form(filename: Option<&str>, skip_field: Option<&str>) -> MultipartForm {
    let mut form = MultipartForm::new();
    for (name, value) in pet_fields() {
        if Some(name) != skip_field {
            form = form.add_text(name, value);
        }
    }
    if let Some(filename) = filename {
        form = form.add_part("photo", photo_part(filename, fake_jpeg()));
    }
    form
}
