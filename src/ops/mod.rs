pub mod day_marks;
