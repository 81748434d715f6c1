#![forbid(unsafe_code)]

//! The migration history, one module per step, registered oldest first.
//!
//! Versions are `YYYYMMDDHHMMSS` stamps and must stay strictly increasing;
//! the planner refuses a registry that is not.

use crate::SchemaError;
use rusqlite::Transaction;

mod activity_materials;
mod baseline;
mod bim_models;
mod box_current_location;
mod box_panels;
mod box_type_links;
mod box_walls_pods;
mod checklist_reference_tables;
mod checklist_sections;
mod checkpoint_versioning;
mod cost_code_master;
mod cost_indexes;
mod cost_management;
mod drop_design_engineer_role;
mod drop_legacy_box_types;
mod ensure_module_permissions;
mod externalize_images;
mod factories;
mod factories_menu_permissions;
mod hr_cost_code_levels;
mod hr_cost_records;
mod issue_assignment_rework;
mod issue_comments;
mod issue_team_assignment;
mod material_ids_to_guid;
mod nav_coming_soon;
mod navigation_menu;
mod panel_management;
mod photos_to_base64;
mod predefined_checklist_items;
mod progress_update_images;
mod project_categories_box_drawings;
mod project_configuration;
mod quality_issue_images;
mod rebuild_material_transactions;
mod schedule_activities;
mod seed_checklist_library;
mod seed_users;
mod seed_wir_checklists;
mod team_group_leader;
mod team_groups;
mod team_structure;
mod trim_demo_seed;
mod wir_checkpoint_images;

pub(crate) struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub up: fn(&Transaction<'_>) -> Result<(), SchemaError>,
    pub down: fn(&Transaction<'_>) -> Result<(), SchemaError>,
}

pub(crate) fn all() -> Vec<Migration> {
    vec![
        baseline::migration(),
        seed_users::migration(),
        team_structure::migration(),
        activity_materials::migration(),
        rebuild_material_transactions::migration(),
        material_ids_to_guid::migration(),
        predefined_checklist_items::migration(),
        box_current_location::migration(),
        photos_to_base64::migration(),
        progress_update_images::migration(),
        quality_issue_images::migration(),
        wir_checkpoint_images::migration(),
        navigation_menu::migration(),
        trim_demo_seed::migration(),
        drop_design_engineer_role::migration(),
        checklist_reference_tables::migration(),
        seed_checklist_library::migration(),
        checklist_sections::migration(),
        seed_wir_checklists::migration(),
        team_groups::migration(),
        team_group_leader::migration(),
        project_categories_box_drawings::migration(),
        box_type_links::migration(),
        issue_team_assignment::migration(),
        factories::migration(),
        factories_menu_permissions::migration(),
        project_configuration::migration(),
        drop_legacy_box_types::migration(),
        issue_assignment_rework::migration(),
        externalize_images::migration(),
        nav_coming_soon::migration(),
        cost_management::migration(),
        hr_cost_records::migration(),
        ensure_module_permissions::migration(),
        schedule_activities::migration(),
        bim_models::migration(),
        cost_code_master::migration(),
        box_walls_pods::migration(),
        checkpoint_versioning::migration(),
        issue_comments::migration(),
        hr_cost_code_levels::migration(),
        cost_indexes::migration(),
        box_panels::migration(),
        panel_management::migration(),
    ]
}
