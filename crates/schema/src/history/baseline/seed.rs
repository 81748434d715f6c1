#![forbid(unsafe_code)]

// All seed rows carry the same fixed stamp so reverts and re-applies
// produce byte-identical data: 1730419200000 = 2024-11-01T00:00:00Z.
pub(super) const SQL: &str = r#"

        INSERT INTO activity_master
          (activity_id, activity_name, stage, sequence_order, is_wir_activity)
        VALUES
          ('act-s1-fab',         'Steel Frame Fabrication',      1, 1, 0),
          ('act-s1-del',         'Frame Delivery to Line',       1, 2, 0),
          ('act-s1-qc',          'Frame Dimensional Check',      1, 3, 0),
          ('act-s2-asm',         'Box Assembly',                 2, 1, 0),
          ('act-s2-pods',        'Pods Placement',               2, 2, 0),
          ('act-s2-mep',         'MEP Rough-In',                 2, 3, 0),
          ('act-s2-elc',         'Electrical Rough-In',          2, 4, 0),
          ('act-s2-clo',         'Box Close-Up',                 2, 5, 0),
          ('act-s2-wir1',        'WIR 1 - Structure',            2, 6, 1),
          ('act-s3-fcu',         'FCU Installation',             3, 1, 0),
          ('act-s3-duct',        'Duct Installation',            3, 2, 0),
          ('act-s3-drain',       'Drainage Piping',              3, 3, 0),
          ('act-s3-water',       'Water Supply Piping',          3, 4, 0),
          ('act-s3-fire',        'Fire Fighting Piping',         3, 5, 0),
          ('act-s3-wir2',        'WIR 2 - Mechanical',           3, 6, 1),
          ('act-s4-containment', 'Cable Containment',            4, 1, 0),
          ('act-s4-wiring',      'Cable Pulling and Wiring',     4, 2, 0),
          ('act-s4-db',          'DB Installation',              4, 3, 0),
          ('act-s4-drywall',     'Drywall and Insulation',       4, 4, 0),
          ('act-s4-wir3',        'WIR 3 - Electrical',           4, 5, 1),
          ('act-s5-ceiling',     'Ceiling Works',                5, 1, 0),
          ('act-s5-tile',        'Floor and Wall Tiling',        5, 2, 0),
          ('act-s5-paint',       'Painting Works',               5, 3, 0),
          ('act-s5-kitchen',     'Kitchen Installation',         5, 4, 0),
          ('act-s5-doors',       'Door Installation',            5, 5, 0),
          ('act-s5-windows',     'Window Installation',          5, 6, 0),
          ('act-s5-wir4',        'WIR 4 - Finishes',             5, 7, 1),
          ('act-s6-switches',    'Switches and Sockets',         6, 1, 0),
          ('act-s6-lights',      'Light Fittings',               6, 2, 0),
          ('act-s6-copper',      'Copper Piping Final',          6, 3, 0),
          ('act-s6-sanitary',    'Sanitary Fixtures',            6, 4, 0),
          ('act-s6-thermo',      'Thermostat Installation',      6, 5, 0),
          ('act-s6-airout',      'Air Outlet Fixing',            6, 6, 0),
          ('act-s6-sprinkler',   'Sprinkler Heads',              6, 7, 0),
          ('act-s6-smoke',       'Smoke Detectors',              6, 8, 0),
          ('act-s6-wir5',        'WIR 5 - Final MEP',            6, 9, 1),
          ('act-s7-iron',        'Ironmongery and Touch-Up',     7, 1, 0),
          ('act-s7-inspection',  'Final Internal Inspection',    7, 2, 0),
          ('act-s7-wrap',        'Protection and Wrapping',      7, 3, 0),
          ('act-s7-wir6',        'WIR 6 - Handover',             7, 4, 1),
          ('act-s8-rfid',        'RFID Tagging and Dispatch',    8, 1, 0),
          ('act-s8-install',     'Site Installation',            8, 2, 0),
          ('act-s8-complete',    'Box Completion Sign-Off',      8, 3, 0);

        INSERT INTO departments
          (department_id, department_name, code, created_at_ms)
        VALUES
          ('dep-it',    'Information Technology', 'IT',   1730419200000),
          ('dep-mgmt',  'Management',             'MGMT', 1730419200000),
          ('dep-eng',   'Engineering',            'ENG',  1730419200000),
          ('dep-const', 'Construction',           'CON',  1730419200000),
          ('dep-qlty',  'Quality',                'QLT',  1730419200000),
          ('dep-proc',  'Procurement',            'PRC',  1730419200000),
          ('dep-hse',   'HSE',                    'HSE',  1730419200000),
          ('dep-mod',   'Modular Production',     'MOD',  1730419200000),
          ('dep-pod',   'Pods Production',        'POD',  1730419200000);

        INSERT INTO roles (role_id, role_name, created_at_ms) VALUES
          ('role-system-admin',       'SystemAdmin',        1730419200000),
          ('role-project-manager',    'ProjectManager',     1730419200000),
          ('role-site-engineer',      'SiteEngineer',       1730419200000),
          ('role-foreman',            'Foreman',            1730419200000),
          ('role-qc-inspector',       'QCInspector',        1730419200000),
          ('role-procurement-officer','ProcurementOfficer', 1730419200000),
          ('role-hse-officer',        'HSEOfficer',         1730419200000),
          ('role-design-engineer',    'DesignEngineer',     1730419200000),
          ('role-cost-estimator',     'CostEstimator',      1730419200000),
          ('role-viewer',             'Viewer',             1730419200000);

        INSERT INTO groups (group_id, group_name, created_at_ms) VALUES
          ('grp-management',   'Management',     1730419200000),
          ('grp-engineering',  'Engineering',    1730419200000),
          ('grp-construction', 'Construction',   1730419200000),
          ('grp-quality',      'QualityControl', 1730419200000),
          ('grp-procurement',  'Procurement',    1730419200000),
          ('grp-hse',          'HSE',            1730419200000),
          ('grp-modular',      'ModularTeam',    1730419200000),
          ('grp-pods',         'PodsTeam',       1730419200000);

        INSERT INTO group_roles
          (group_role_id, group_id, role_id, assigned_at_ms)
        VALUES
          ('gr-mgmt-admin', 'grp-management',   'role-system-admin',        1730419200000),
          ('gr-mgmt-pm',    'grp-management',   'role-project-manager',     1730419200000),
          ('gr-mgmt-cost',  'grp-management',   'role-cost-estimator',      1730419200000),
          ('gr-mgmt-view',  'grp-management',   'role-viewer',              1730419200000),
          ('gr-eng-site',   'grp-engineering',  'role-site-engineer',       1730419200000),
          ('gr-eng-design', 'grp-engineering',  'role-design-engineer',     1730419200000),
          ('gr-eng-view',   'grp-engineering',  'role-viewer',              1730419200000),
          ('gr-con-site',   'grp-construction', 'role-site-engineer',       1730419200000),
          ('gr-con-fore',   'grp-construction', 'role-foreman',             1730419200000),
          ('gr-qlt-qc',     'grp-quality',      'role-qc-inspector',        1730419200000),
          ('gr-qlt-view',   'grp-quality',      'role-viewer',              1730419200000),
          ('gr-prc-officer','grp-procurement',  'role-procurement-officer', 1730419200000),
          ('gr-hse-officer','grp-hse',          'role-hse-officer',         1730419200000),
          ('gr-mod-fore',   'grp-modular',      'role-foreman',             1730419200000),
          ('gr-mod-view',   'grp-modular',      'role-viewer',              1730419200000),
          ('gr-pod-fore',   'grp-pods',         'role-foreman',             1730419200000),
          ('gr-pod-view',   'grp-pods',         'role-viewer',              1730419200000);
"#;
