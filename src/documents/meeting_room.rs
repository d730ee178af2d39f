//! Meeting Room Booking

use crate::schema::{DocumentSchema, FieldDescriptor, SelectOption, TableSpec};

pub fn meeting_room_booking() -> DocumentSchema {
    DocumentSchema::builder("meeting.room.booking", "Meeting Room Booking")
        .section(
            "Booking Details",
            vec![
                FieldDescriptor::date("bookingDate", "Booking Date").required(),
                FieldDescriptor::time("startTime", "Start Time").required(),
                FieldDescriptor::time("endTime", "End Time").required(),
                FieldDescriptor::select(
                    "room",
                    "Room",
                    vec![
                        SelectOption::new("BOARDROOM", "Boardroom"),
                        SelectOption::new("MR-1", "Meeting Room 1"),
                        SelectOption::new("MR-2", "Meeting Room 2"),
                        SelectOption::new("TRAINING", "Training Suite"),
                    ],
                )
                .required(),
                FieldDescriptor::text("organizer", "Organizer").required(),
                FieldDescriptor::email("organizerEmail", "Organizer Email").required(),
                FieldDescriptor::textarea("purpose", "Purpose of Meeting"),
            ],
        )
        .table_section(
            "Attendees",
            TableSpec::new(
                "attendees",
                vec![
                    FieldDescriptor::text("name", "Name").required(),
                    FieldDescriptor::email("email", "Email"),
                ],
            )
            .min_rows(1),
        )
        .build()
        .expect("builtin document schema is well-formed")
}
