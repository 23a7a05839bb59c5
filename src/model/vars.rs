//! Decision-variable allocation & the occupancy link (I1, I2).

use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar};

use crate::types::Instance;

/// The dense `[class][day][hour]` decision-variable grid plus its shape.
/// Indexed by position, not by name: `subject[c][d][h] = -1` means free,
/// otherwise it holds `index(subjects[k])`.
pub struct Grid {
    pub num_classes: usize,
    pub num_subjects: usize,
    pub num_teachers: usize,
    pub days: u32,
    pub hours_per_day: u32,
    pub subject: Vec<Vec<Vec<IntVar>>>,
    pub teacher: Vec<Vec<Vec<IntVar>>>,
    pub occupied: Vec<Vec<Vec<BoolVar>>>,
}

impl Grid {
    pub fn day_range(&self) -> std::ops::Range<u32> {
        0..self.days
    }

    pub fn hour_range(&self) -> std::ops::Range<u32> {
        0..self.hours_per_day
    }
}

pub fn allocate(model: &mut CpModelBuilder, instance: &Instance) -> Grid {
    let num_classes = instance.classes.len();
    let num_subjects = instance.subjects.len();
    let num_teachers = instance.teachers.len();
    let days = instance.days;
    let hours_per_day = instance.hours_per_day;

    let subject_domain = vec![(-1, num_subjects as i64 - 1)];
    let teacher_domain = vec![(-1, num_teachers as i64 - 1)];

    let mut subject = Vec::with_capacity(num_classes);
    let mut teacher = Vec::with_capacity(num_classes);
    let mut occupied = Vec::with_capacity(num_classes);

    for _c in 0..num_classes {
        let mut subj_days = Vec::with_capacity(days as usize);
        let mut teach_days = Vec::with_capacity(days as usize);
        let mut occ_days = Vec::with_capacity(days as usize);
        for _d in 0..days {
            let mut subj_hours = Vec::with_capacity(hours_per_day as usize);
            let mut teach_hours = Vec::with_capacity(hours_per_day as usize);
            let mut occ_hours = Vec::with_capacity(hours_per_day as usize);
            for _h in 0..hours_per_day {
                let s = model.new_int_var(subject_domain.clone());
                let t = model.new_int_var(teacher_domain.clone());
                let occ = model.new_bool_var();

                // I1: occupied ⇒ subject ≥ 0, ¬occupied ⇒ subject = -1.
                model.add_ge(s.clone(), 0).only_enforce_if(occ.clone());
                model.add_le(s.clone(), -1).only_enforce_if(!occ.clone());
                // I2: the same link for the teacher slot.
                model.add_ge(t.clone(), 0).only_enforce_if(occ.clone());
                model.add_le(t.clone(), -1).only_enforce_if(!occ.clone());

                subj_hours.push(s);
                teach_hours.push(t);
                occ_hours.push(occ);
            }
            subj_days.push(subj_hours);
            teach_days.push(teach_hours);
            occ_days.push(occ_hours);
        }
        subject.push(subj_days);
        teacher.push(teach_days);
        occupied.push(occ_days);
    }

    Grid {
        num_classes,
        num_subjects,
        num_teachers,
        days,
        hours_per_day,
        subject,
        teacher,
        occupied,
    }
}
