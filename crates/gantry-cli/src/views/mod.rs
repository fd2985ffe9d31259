pub mod gantt;
