pub mod cascade_menu;
